// vidaudio-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::ToolRunner;
use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// What a matched expectation does when run.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Exit with the given code, optionally creating the output file first.
    Exit { code: i32, create_output: bool },
    /// Fail to start with the given error kind.
    SpawnError(io::ErrorKind),
}

/// Represents an expected ffmpeg call and its scripted result.
struct MockExpectation {
    arg_pattern: String,
    behavior: MockBehavior,
}

/// Mock implementation of ToolRunner supporting multiple expectations.
///
/// Each call is matched against the first unused expectation whose pattern
/// appears in one of its arguments. Unmatched calls panic.
#[derive(Clone, Default)]
pub struct MockRunner {
    expectations: Rc<RefCell<Vec<MockExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(&self, arg_pattern: &str, behavior: MockBehavior) {
        self.expectations.borrow_mut().push(MockExpectation {
            arg_pattern: arg_pattern.to_string(),
            behavior,
        });
    }

    pub fn add_success_expectation(&self, arg_pattern: &str) {
        self.add_expectation(
            arg_pattern,
            MockBehavior::Exit {
                code: 0,
                create_output: true,
            },
        );
    }

    pub fn add_exit_error_expectation(&self, arg_pattern: &str, code: i32) {
        self.add_expectation(
            arg_pattern,
            MockBehavior::Exit {
                code,
                create_output: false,
            },
        );
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, kind: io::ErrorKind) {
        self.add_expectation(arg_pattern, MockBehavior::SpawnError(kind));
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, _program: &Path, args: &[OsString]) -> io::Result<i32> {
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();
        let index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)))
            .unwrap_or_else(|| panic!("MockRunner: No expectation found for args: {:?}", args));
        let expectation = expectations.remove(index);

        match expectation.behavior {
            MockBehavior::Exit {
                code,
                create_output,
            } => {
                if create_output {
                    if let Some(output) = args.last() {
                        std::fs::write(PathBuf::from(output), b"mock mp3")?;
                    }
                }
                Ok(code)
            }
            MockBehavior::SpawnError(kind) => {
                Err(io::Error::new(kind, "simulated spawn failure"))
            }
        }
    }
}
