//! Applies a scripted sequence of list operations to a `LinkedList<String>`
//! and prints the list after every change.
//!
//! Run with: cargo run --bin chain_demo -- append:1 append:2 prepend:0 remove:0 pop size
//!
//! Set `RUST_LOG=trace` to see every link and unlink.

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{error, info};
use singly_linked::{LinkedList, ListError};
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Fail on out-of-range indices instead of ignoring them
    #[clap(long)]
    strict: bool,

    /// Operations: append:V prepend:V insert:I:V remove:I pop at:I find:V contains:V tail size
    #[clap(value_name = "OP", required = true)]
    ops: Vec<Op>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Append(String),
    Prepend(String),
    Insert(usize, String),
    Remove(usize),
    Pop,
    At(usize),
    Find(String),
    Contains(String),
    Tail,
    Size,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum OpParseError {
    #[error("unknown operation `{0}`")]
    Unknown(String),
    #[error("operation `{0}` is missing its argument")]
    MissingArgument(String),
    #[error("`{0}` is not a valid index")]
    BadIndex(String),
}

fn parse_index(text: &str) -> Result<usize, OpParseError> {
    text.parse()
        .map_err(|_| OpParseError::BadIndex(text.to_string()))
}

impl FromStr for Op {
    type Err = OpParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match text.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (text, None),
        };
        let argument = || argument.ok_or_else(|| OpParseError::MissingArgument(name.to_string()));

        let op = match name {
            "append" => Op::Append(argument()?.to_string()),
            "prepend" => Op::Prepend(argument()?.to_string()),
            "insert" => {
                let (index, value) = argument()?
                    .split_once(':')
                    .ok_or_else(|| OpParseError::MissingArgument(name.to_string()))?;
                Op::Insert(parse_index(index)?, value.to_string())
            }
            "remove" => Op::Remove(parse_index(argument()?)?),
            "pop" => Op::Pop,
            "at" => Op::At(parse_index(argument()?)?),
            "find" => Op::Find(argument()?.to_string()),
            "contains" => Op::Contains(argument()?.to_string()),
            "tail" => Op::Tail,
            "size" => Op::Size,
            _ => return Err(OpParseError::Unknown(text.to_string())),
        };
        Ok(op)
    }
}

fn show(value: Option<impl std::fmt::Display>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("null"),
    }
}

/// Applies one operation and returns the line to print for it.
fn apply(list: &mut LinkedList<String>, op: &Op, strict: bool) -> Result<String, ListError> {
    let line = match op {
        Op::Append(value) => {
            list.append(value.clone());
            list.to_string()
        }
        Op::Prepend(value) => {
            list.prepend(value.clone());
            list.to_string()
        }
        Op::Insert(index, value) => {
            if strict {
                list.try_insert_at(*index, value.clone())?;
            } else {
                list.insert_at(*index, value.clone());
            }
            list.to_string()
        }
        Op::Remove(index) => {
            let removed = if strict {
                Some(list.try_remove_at(*index)?)
            } else {
                list.remove_at(*index)
            };
            format!("removed {}: {list}", show(removed))
        }
        Op::Pop => {
            let popped = list.pop();
            format!("popped {}: {list}", show(popped))
        }
        Op::At(index) => {
            let value = if strict {
                Some(list.try_at(*index)?)
            } else {
                list.at(*index)
            };
            show(value)
        }
        Op::Find(value) => show(list.find(value)),
        Op::Contains(value) => list.contains(value).to_string(),
        Op::Tail => show(list.tail()),
        Op::Size => list.size().to_string(),
    };
    Ok(line)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("applying {} operations (strict: {})", args.ops.len(), args.strict);

    let mut list = LinkedList::new();
    for op in &args.ops {
        match apply(&mut list, op, args.strict) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                error!("{op:?} failed: {err}");
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ops: &[&str], strict: bool) -> Result<Vec<String>, ListError> {
        let mut list = LinkedList::new();
        ops.iter()
            .map(|text| Op::from_str(text).unwrap())
            .map(|op| apply(&mut list, &op, strict))
            .collect()
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("append:a".parse::<Op>(), Ok(Op::Append("a".into())));
        assert_eq!("append:a:b".parse::<Op>(), Ok(Op::Append("a:b".into())));
        assert_eq!("insert:2:x".parse::<Op>(), Ok(Op::Insert(2, "x".into())));
        assert_eq!("pop".parse::<Op>(), Ok(Op::Pop));
        assert_eq!("size".parse::<Op>(), Ok(Op::Size));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "shuffle".parse::<Op>(),
            Err(OpParseError::Unknown("shuffle".into()))
        );
        assert_eq!(
            "append".parse::<Op>(),
            Err(OpParseError::MissingArgument("append".into()))
        );
        assert_eq!(
            "insert:3".parse::<Op>(),
            Err(OpParseError::MissingArgument("insert".into()))
        );
        assert_eq!(
            "at:-1".parse::<Op>(),
            Err(OpParseError::BadIndex("-1".into()))
        );
    }

    #[test]
    fn test_script_output() {
        let lines = run(
            &["append:1", "append:2", "prepend:0", "at:1", "remove:0", "pop", "size"],
            false,
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "( 1 ) -> ( null )",
                "( 1 ) -> ( 2 ) -> ( null )",
                "( 0 ) -> ( 1 ) -> ( 2 ) -> ( null )",
                "1",
                "removed 0: ( 1 ) -> ( 2 ) -> ( null )",
                "popped 2: ( 1 ) -> ( null )",
                "1",
            ]
        );
    }

    #[test]
    fn test_permissive_out_of_range() {
        let lines = run(&["append:a", "insert:5:x", "at:5", "remove:9"], false).unwrap();
        assert_eq!(lines[1], "( a ) -> ( null )");
        assert_eq!(lines[2], "null");
        assert_eq!(lines[3], "removed null: ( a ) -> ( null )");
    }

    #[test]
    fn test_strict_out_of_range() {
        assert_eq!(
            run(&["append:a", "insert:5:x"], true),
            Err(ListError::IndexOutOfBounds { index: 5, size: 1 })
        );
    }

    #[test]
    fn test_queries() {
        let lines = run(
            &["append:x", "append:y", "find:y", "find:z", "contains:x", "tail"],
            false,
        )
        .unwrap();
        assert_eq!(lines[2..], ["1", "null", "true", "y"]);
    }
}
