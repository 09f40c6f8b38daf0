// crates/markets-core/src/report.rs
use crate::validate::FieldError;
use std::fmt;

/// Something that kept a file, or a record in it, out of the artifact.
///
/// Every variant is handled the same way (collected, printed, exit 1); they
/// only differ in how they read. `file` is the display name relative to the
/// source root, e.g. `./occitanie/aveyron.json`.
#[derive(Debug)]
pub enum BuildFailure {
    /// The top-level value of the file is not an array.
    Shape { file: String },
    /// One field of one record failed its check.
    Field {
        file: String,
        index: usize,
        error: FieldError,
    },
    /// The file could not be read (or the tree could not be walked).
    Io { file: String, source: std::io::Error },
    /// The file is not JSON at all.
    Json {
        file: String,
        source: serde_json::Error,
    },
    /// The worker thread handling the file died.
    Worker { file: String },
}

impl BuildFailure {
    pub fn file(&self) -> &str {
        match self {
            BuildFailure::Shape { file }
            | BuildFailure::Field { file, .. }
            | BuildFailure::Io { file, .. }
            | BuildFailure::Json { file, .. }
            | BuildFailure::Worker { file } => file,
        }
    }

    /// Element index, for record-level failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            BuildFailure::Field { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// True for the two validation kinds, false for I/O-class failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, BuildFailure::Shape { .. } | BuildFailure::Field { .. })
    }
}

impl BuildFailure {
    /// What went wrong, without the `[file]` prefix.
    fn write_reason(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFailure::Shape { .. } => write!(f, "The file is not an array"),
            BuildFailure::Field { index, error, .. } => write!(f, "[index {index}] {error}"),
            BuildFailure::Io { source, .. } => write!(f, "Unable to read: {source}"),
            BuildFailure::Json { source, .. } => write!(f, "Invalid JSON: {source}"),
            BuildFailure::Worker { .. } => write!(f, "Processing thread panicked"),
        }
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.file())?;
        if self.index().is_none() {
            write!(f, " ")?;
        }
        self.write_reason(f)
    }
}

/// Display adapter for one failure under its file header.
struct Reason<'a>(&'a BuildFailure);

impl fmt::Display for Reason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_reason(f)
    }
}

/// Outcome of a build: what was written and everything that went wrong.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of input files discovered.
    pub files: usize,
    /// Number of compact records in the artifact.
    pub written: usize,
    pub failures: Vec<BuildFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status matching this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Failures grouped by file, in the order the files were first seen.
    pub fn grouped(&self) -> Vec<(&str, Vec<&BuildFailure>)> {
        let mut groups: Vec<(&str, Vec<&BuildFailure>)> = Vec::new();
        for failure in &self.failures {
            match groups.iter_mut().find(|(file, _)| *file == failure.file()) {
                Some((_, list)) => list.push(failure),
                None => groups.push((failure.file(), vec![failure])),
            }
        }
        groups
    }
}

impl fmt::Display for BuildReport {
    /// Human-readable end-of-run diagnostics: one header per file, then one
    /// indented line per failure in that file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return write!(
                f,
                "{} markets written from {} files",
                self.written, self.files
            );
        }
        writeln!(f, "Some files have errors:")?;
        for (file, failures) in self.grouped() {
            writeln!(f, "  {file}")?;
            for failure in failures {
                writeln!(f, "    {}", Reason(failure))?;
            }
        }
        Ok(())
    }
}
