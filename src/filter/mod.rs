//! File selection: which repository paths take part in the tally.
//!
//! A path passes when it satisfies every configured predicate: one of the
//! extensions, one of the languages, none of the exclude globs and, if any
//! are given, one of the restrict-to globs. An empty list never restricts.

pub mod language;

use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::warn;

use crate::config::FilterSettings;
use crate::error::Result;
use language::LanguageSpec;

pub struct FileFilter {
    extensions: Vec<String>,
    languages: Option<Vec<&'static LanguageSpec>>,
    exclude: GlobSet,
    restrict_to: Option<GlobSet>,
}

/// `*` and `?` stop at `/`, like shell path matching.
fn glob(pattern: &str) -> Result<Glob> {
    Ok(GlobBuilder::new(pattern).literal_separator(true).build()?)
}

fn glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(glob(pattern)?);
    }
    Ok(builder.build()?)
}

impl FileFilter {
    pub fn new(settings: &FilterSettings) -> Result<Self> {
        let languages = if settings.languages.is_empty() {
            None
        } else {
            let mut specs = Vec::new();
            for name in &settings.languages {
                match language::find_by_name(name) {
                    Some(spec) => specs.push(spec),
                    None => warn!(language = name.as_str(), "unknown language, ignored"),
                }
            }
            Some(specs)
        };

        let restrict_to = if settings.restrict_to.is_empty() {
            None
        } else {
            Some(glob_set(&settings.restrict_to)?)
        };

        Ok(Self {
            extensions: settings.extensions.clone(),
            languages,
            exclude: glob_set(&settings.exclude)?,
            restrict_to,
        })
    }

    pub fn is_suitable(&self, path: &str) -> bool {
        self.matches_extension(path)
            && self.matches_language(path)
            && !self.exclude.is_match(path)
            && self.restrict_to.as_ref().is_none_or(|set| set.is_match(path))
    }

    fn matches_extension(&self, path: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    fn matches_language(&self, path: &str) -> bool {
        let Some(wanted) = &self.languages else {
            return true;
        };
        language::detect(Path::new(path))
            .is_some_and(|spec| wanted.iter().any(|w| w.name == spec.name))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
