//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fjour")]
#[command(about = "Field journal with dated entries and comments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal with the seed entries
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List entries, newest first
    List,

    /// Show an entry with its comments
    Show {
        /// Entry id
        id: i64,
    },

    /// Create a new entry
    New {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        location: String,

        /// Entry text; use --content-file for multi-paragraph text
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read entry text from a file ('-' for stdin)
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        /// Image file to embed
        #[arg(short, long, value_name = "FILE")]
        image: Option<PathBuf>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read entry text from a file ('-' for stdin)
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        /// Replace the image with this file
        #[arg(short, long, value_name = "FILE", conflicts_with = "remove_image")]
        image: Option<PathBuf>,

        /// Remove the entry's image
        #[arg(long)]
        remove_image: bool,
    },

    /// Add a comment to an entry
    Comment {
        /// Entry id
        id: i64,

        /// Comment text
        text: String,
    },

    /// List an entry's comments, oldest first
    Comments {
        /// Entry id
        id: i64,
    },

    /// Write an entry's embedded image to a file
    ExportImage {
        /// Entry id
        id: i64,

        /// Output file
        output: PathBuf,
    },

    /// Print the journal root directory
    Folder,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_edit_rejects_image_with_remove_image() {
        let result = Cli::try_parse_from([
            "fjour",
            "edit",
            "1",
            "--image",
            "a.png",
            "--remove-image",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from([
            "fjour", "new", "-t", "T", "-l", "L", "-c", "C",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::New { title, content, .. }) => {
                assert_eq!(title, "T");
                assert_eq!(content.as_deref(), Some("C"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
