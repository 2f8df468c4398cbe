use std::time::{Duration, Instant};

pub const ENV_KEYS: &[&str] = &[
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_PLAYERS",
    "SHOWDOWN_SEED",
    "SHOWDOWN_COLOR",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run with every `SHOWDOWN_*` variable cleared.
    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    /// Run with exactly the given `SHOWDOWN_*` variables set.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<String> = std::iter::once("showdown".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let start = Instant::now();
        let code = showdown_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }
}

/// Restores the previous values of [`ENV_KEYS`] on drop.
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn apply(env: &[(&str, &str)]) -> Self {
        let saved = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();
        for key in ENV_KEYS {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in env {
            unsafe { std::env::set_var(key, value) };
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
