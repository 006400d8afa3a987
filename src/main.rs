use clap::Parser;
use fjour::application::{
    init::init, CommentService, ConfigService, EditEntryService, EntryView, Journal,
    NewEntryService,
};
use fjour::cli::{format_comment_list, format_entry_list, format_entry_view, Cli, Commands};
use fjour::domain::EntryDraft;
use fjour::error::{JournalError, Result};
use fjour::infrastructure::{FileSystemStorage, ImageLoad, JournalRepository};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("FJOUR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init()
        .ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_journal() -> Result<Journal<FileSystemStorage>> {
    Journal::open_repository(FileSystemStorage::discover()?)
}

/// Inline text wins; otherwise read the file, with '-' meaning stdin
fn read_content(inline: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(Some(text.trim_end_matches('\n').to_string()))
        }
        (None, Some(path)) => Ok(Some(
            std::fs::read_to_string(&path)?
                .trim_end_matches('\n')
                .to_string(),
        )),
        (None, None) => Ok(None),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let seeded = init(&path)?;
            println!("Initialized fjour journal at {}", path.display());
            println!("Seeded {} entries", seeded);
            Ok(())
        }
        Some(Commands::List) => {
            let journal = open_journal()?;
            print!("{}", format_entry_list(journal.entries().entries()));
            if journal.entries().is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let journal = open_journal()?;
            let view = EntryView::load(&journal, id)?;
            print!("{}", format_entry_view(&view));
            if view.comments.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::New {
            title,
            location,
            content,
            content_file,
            image,
        }) => {
            let mut journal = open_journal()?;
            let mut draft = EntryDraft {
                title,
                location,
                content: read_content(content, content_file)?.unwrap_or_default(),
                ..Default::default()
            };
            if let Some(path) = image {
                ImageLoad::start(path).wait(&mut draft)?;
            }

            let entry = NewEntryService::new(journal.entries_mut()).submit(&draft)?;
            println!("Created entry {} ({})", entry.id, entry.date);
            Ok(())
        }
        Some(Commands::Edit {
            id,
            title,
            location,
            content,
            content_file,
            image,
            remove_image,
        }) => {
            let mut journal = open_journal()?;
            let mut service = EditEntryService::new(journal.entries_mut());
            let mut draft = service.draft_for(id)?;

            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(location) = location {
                draft.location = location;
            }
            if let Some(content) = read_content(content, content_file)? {
                draft.content = content;
            }
            if remove_image {
                draft.clear_image();
            } else if let Some(path) = image {
                ImageLoad::start(path).wait(&mut draft)?;
            }

            let entry = service.submit(id, draft)?;
            println!("Updated entry {}", entry.id);
            Ok(())
        }
        Some(Commands::Comment { id, text }) => {
            let mut journal = open_journal()?;
            let entry = journal
                .entries()
                .get_entry(id)
                .cloned()
                .ok_or(JournalError::EntryNotFound(id))?;

            let comment = CommentService::new(journal.comments_mut()).post(&entry, &text)?;
            println!("Added comment to entry {} ({})", entry.id, comment.date);
            Ok(())
        }
        Some(Commands::Comments { id }) => {
            let journal = open_journal()?;
            let view = EntryView::load(&journal, id)?;
            print!("{}", format_comment_list(&view.comments));
            if view.comments.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::ExportImage { id, output }) => {
            let journal = open_journal()?;
            let image = EntryView::load(&journal, id)?.decode_image()?;
            std::fs::write(&output, &image.data)?;
            println!(
                "Wrote {} bytes ({}) to {}",
                image.len(),
                image.mime_type,
                output.display()
            );
            Ok(())
        }
        Some(Commands::Folder) => {
            let repository = FileSystemStorage::discover()?;
            println!("{}", repository.root().display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let service = ConfigService::new(FileSystemStorage::discover()?);

            if list {
                // List all config
                let config = service.list()?;
                println!("date_format = {}", config.date_format);
                println!("timestamp_format = {}", config.timestamp_format);
                println!("on_corrupt = {}", config.on_corrupt);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    // Get config value
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                // No key provided, show usage
                println!("Usage: fjour config [--list | <key> [<value>]]");
                println!("Valid keys: date_format, timestamp_format, on_corrupt, created");
                Ok(())
            }
        }
        None => {
            println!("fjour - Field journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
