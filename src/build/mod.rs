mod shell;

pub use shell::{BuildShell, BuiltShell, ShellParams};
