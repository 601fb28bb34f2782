//! Interactive session driven by line commands on stdin.

use anyhow::Result;
use docsift_session::{Orchestrator, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::files::load_uploads;
use crate::{print_view, spawn_progress_reporter, OutputFormat};

const HELP: &str = "\
Commands:
  upload <paths...>   stage a new batch of files
  keyword [text]      set the search keyword (empty matches everything)
  extract             extract text from the staged files
  next | prev         change page
  page <n>            jump to page n
  show                print the current page
  help                show this help
  quit                leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Upload(Vec<String>),
    Keyword(String),
    Extract,
    Next,
    Previous,
    Page(usize),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let parsed = match command.to_lowercase().as_str() {
        "upload" => {
            let paths: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
            if paths.is_empty() {
                return Err("usage: upload <paths...>".to_string());
            }
            ShellCommand::Upload(paths)
        }
        // The keyword is taken verbatim, spaces included.
        "keyword" => ShellCommand::Keyword(rest.to_string()),
        "extract" => ShellCommand::Extract,
        "next" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Previous,
        "page" => {
            let page = rest
                .trim()
                .parse()
                .map_err(|_| "usage: page <n>".to_string())?;
            ShellCommand::Page(page)
        }
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Some(parsed))
}

/// Run the shell until `quit` or end of input.
pub async fn run(config: &Config, orchestrator: &Orchestrator, format: OutputFormat) -> Result<()> {
    let mut session = Session::new(config.search.items_per_page);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("docsift shell. Type 'help' for commands.");

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            ShellCommand::Upload(paths) => {
                let uploads = match load_uploads(&paths, None, config.extract.max_file_size).await
                {
                    Ok(uploads) => uploads,
                    Err(e) => {
                        eprintln!("{e:#}");
                        continue;
                    }
                };
                match session.upload(uploads) {
                    Ok(count) => println!(
                        "Staged {count} file(s): {}",
                        session.upload_status().unwrap_or_default()
                    ),
                    Err(e) => eprintln!("{e}"),
                }
            }
            ShellCommand::Keyword(keyword) => {
                session.set_keyword(keyword);
                print_view(&session, format)?;
            }
            ShellCommand::Extract => {
                let progress = spawn_progress_reporter(orchestrator);
                session.extract(orchestrator).await;
                let _ = progress.await;
                print_view(&session, format)?;
            }
            ShellCommand::Next => {
                session.next_page();
                print_view(&session, format)?;
            }
            ShellCommand::Previous => {
                session.previous_page();
                print_view(&session, format)?;
            }
            ShellCommand::Page(page) => {
                session.go_to_page(page);
                print_view(&session, format)?;
            }
            ShellCommand::Show => print_view(&session, format)?,
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \n"), Ok(None));
    }

    #[test]
    fn test_parse_upload() {
        assert_eq!(
            parse_command("upload a.pdf  b.xlsx\n"),
            Ok(Some(ShellCommand::Upload(vec![
                "a.pdf".to_string(),
                "b.xlsx".to_string()
            ])))
        );
        assert!(parse_command("upload").is_err());
    }

    #[test]
    fn test_parse_keyword_keeps_spaces() {
        assert_eq!(
            parse_command("keyword  net income "),
            Ok(Some(ShellCommand::Keyword(" net income ".to_string())))
        );
        assert_eq!(
            parse_command("keyword"),
            Ok(Some(ShellCommand::Keyword(String::new())))
        );
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("next"), Ok(Some(ShellCommand::Next)));
        assert_eq!(parse_command("PREV"), Ok(Some(ShellCommand::Previous)));
        assert_eq!(parse_command("page 3"), Ok(Some(ShellCommand::Page(3))));
        assert!(parse_command("page three").is_err());
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_command("extract"), Ok(Some(ShellCommand::Extract)));
        assert_eq!(parse_command("show"), Ok(Some(ShellCommand::Show)));
        assert_eq!(parse_command("?"), Ok(Some(ShellCommand::Help)));
        assert_eq!(parse_command("exit"), Ok(Some(ShellCommand::Quit)));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_command("frobnicate now").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
