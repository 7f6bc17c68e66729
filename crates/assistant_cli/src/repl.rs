//! Interactive question loop

#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};

use assistant::Assistant;

/// Word that ends the interactive loop
pub const SENTINEL: &str = "exit";

/// Prefix routing a question through the query-and-analyze workflow
pub const QUERY_PREFIX: &str = "/query";

/// One line of user input, classified
#[derive(Debug, PartialEq, Eq)]
pub enum UserInput {
    /// End the loop
    Exit,
    /// Blank line, ignored
    Empty,
    /// Plain question
    Ask(String),
    /// Question for the query-and-analyze workflow
    Query(String),
}

impl UserInput {
    /// Classify a raw input line
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if line.eq_ignore_ascii_case(SENTINEL) {
            return Self::Exit;
        }
        if let Some(rest) = line.strip_prefix(QUERY_PREFIX) {
            let question = rest.trim();
            if question.is_empty() {
                return Self::Empty;
            }
            return Self::Query(question.to_string());
        }
        Self::Ask(line.to_string())
    }
}

/// Resolve an index choice typed by the user
///
/// A number picks from the listed names (1-indexed, as printed); anything
/// else is taken as an index name verbatim, even if it was not listed.
pub fn parse_index_choice(input: &str, names: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        return names.get(n.checked_sub(1)?).cloned();
    }
    Some(input.to_string())
}

/// Run the question loop until the sentinel word or EOF
///
/// Errors from either service are printed in place of an answer; the loop
/// always continues to the next question.
pub async fn run(assistant: &Assistant) -> io::Result<()> {
    println!(
        "\nAsk questions about index '{}'. Type '{QUERY_PREFIX} <question>' to have a query \
         proposed and executed, or '{SENTINEL}' to quit.",
        assistant.context().index()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };

        match UserInput::parse(&line?) {
            UserInput::Exit => {
                println!("Bye.");
                break;
            },
            UserInput::Empty => {},
            UserInput::Ask(question) => match assistant.ask(&question).await {
                Ok(answer) => println!("\nAnswer: {answer}"),
                Err(e) => println!("\nError: {e}"),
            },
            UserInput::Query(question) => match assistant.query_and_analyze(&question).await {
                Ok(answer) => println!("\nAnswer: {answer}"),
                Err(e) => println!("\nError: {e}"),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_ends_the_loop_case_insensitively() {
        assert_eq!(UserInput::parse("exit"), UserInput::Exit);
        assert_eq!(UserInput::parse("EXIT"), UserInput::Exit);
        assert_eq!(UserInput::parse("  Exit  "), UserInput::Exit);
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(UserInput::parse(""), UserInput::Empty);
        assert_eq!(UserInput::parse("   "), UserInput::Empty);
    }

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            UserInput::parse("What fields exist?"),
            UserInput::Ask("What fields exist?".to_string())
        );
    }

    #[test]
    fn query_prefix_routes_to_query_workflow() {
        assert_eq!(
            UserInput::parse("/query How many books per year?"),
            UserInput::Query("How many books per year?".to_string())
        );
    }

    #[test]
    fn bare_query_prefix_is_empty() {
        assert_eq!(UserInput::parse("/query"), UserInput::Empty);
        assert_eq!(UserInput::parse("/query   "), UserInput::Empty);
    }

    #[test]
    fn question_containing_exit_is_still_a_question() {
        assert_eq!(
            UserInput::parse("when do I exit?"),
            UserInput::Ask("when do I exit?".to_string())
        );
    }

    fn names() -> Vec<String> {
        vec!["books".to_string(), "orders".to_string()]
    }

    #[test]
    fn numeric_choice_is_one_indexed() {
        assert_eq!(parse_index_choice("1", &names()), Some("books".to_string()));
        assert_eq!(parse_index_choice("2", &names()), Some("orders".to_string()));
    }

    #[test]
    fn out_of_range_number_is_rejected() {
        assert_eq!(parse_index_choice("0", &names()), None);
        assert_eq!(parse_index_choice("3", &names()), None);
    }

    #[test]
    fn name_choice_is_taken_verbatim() {
        assert_eq!(
            parse_index_choice("orders", &names()),
            Some("orders".to_string())
        );
        // Unlisted names pass through; the mapping fetch will report a
        // missing index.
        assert_eq!(
            parse_index_choice("unlisted", &names()),
            Some("unlisted".to_string())
        );
    }

    #[test]
    fn empty_choice_is_rejected() {
        assert_eq!(parse_index_choice("  ", &names()), None);
    }
}
