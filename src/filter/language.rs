use std::path::Path;

#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
}

macro_rules! lang {
    ($name:expr, ext: [$($ext:expr),*], files: [$($f:expr),*]) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),*],
            filenames: &[$($f),*],
        }
    };
    ($name:expr, ext: [$($ext:expr),*]) => {
        lang!($name, ext: [$($ext),*], files: [])
    };
}

pub fn languages() -> &'static [LanguageSpec] {
    static LANGUAGES: &[LanguageSpec] = &[
        lang!("Rust", ext: ["rs"]),
        lang!("Python", ext: ["py", "pyi"]),
        lang!("JavaScript", ext: ["js", "mjs", "cjs"]),
        lang!("TypeScript", ext: ["ts", "mts", "cts", "tsx"]),
        lang!("Java", ext: ["java"]),
        lang!("C", ext: ["c", "h"]),
        lang!("C++", ext: ["cpp", "cxx", "cc", "hpp", "hxx"]),
        lang!("C#", ext: ["cs"]),
        lang!("Go", ext: ["go"], files: ["go.mod", "go.sum"]),
        lang!("Ruby", ext: ["rb"], files: ["Rakefile", "Gemfile"]),
        lang!("Shell", ext: ["sh", "bash", "zsh"]),
        lang!("HTML", ext: ["html", "htm"]),
        lang!("CSS", ext: ["css", "scss", "sass", "less"]),
        lang!("SQL", ext: ["sql"]),
        lang!("TOML", ext: ["toml"]),
        lang!("YAML", ext: ["yaml", "yml"]),
        lang!("JSON", ext: ["json"]),
        lang!("Markdown", ext: ["md", "markdown"]),
        lang!("Kotlin", ext: ["kt", "kts"]),
        lang!("Swift", ext: ["swift"]),
        lang!("PHP", ext: ["php"]),
        lang!("Dart", ext: ["dart"]),
        lang!("Haskell", ext: ["hs"]),
        lang!("Lua", ext: ["lua"]),
        lang!("Perl", ext: ["pl", "pm"]),
        lang!("R", ext: ["r", "R"]),
        lang!("Scala", ext: ["scala", "sc", "sbt"]),
        lang!("XML", ext: ["xml", "xsl", "xslt", "svg", "plist"]),
        lang!("Dockerfile", ext: [], files: ["Dockerfile"]),
        lang!("Makefile", ext: ["mk"], files: ["Makefile", "makefile", "GNUmakefile"]),
        lang!("Elixir", ext: ["ex", "exs"]),
        lang!("Clojure", ext: ["clj", "cljs", "cljc", "edn"]),
        lang!("Zig", ext: ["zig"]),
        lang!("Objective-C", ext: ["m", "mm"]),
        lang!("OCaml", ext: ["ml", "mli"]),
        lang!("F#", ext: ["fs", "fsi", "fsx"]),
        lang!("Julia", ext: ["jl"]),
        lang!("Terraform", ext: ["tf"]),
        lang!("Erlang", ext: ["erl", "hrl"]),
        lang!("Protocol Buffers", ext: ["proto"]),
        lang!("Text", ext: ["txt"]),
    ];
    LANGUAGES
}

/// Detect by exact file name first, then by extension.
pub fn detect(path: &Path) -> Option<&'static LanguageSpec> {
    let file_name = path.file_name()?.to_str()?;

    if let Some(spec) = languages()
        .iter()
        .find(|spec| spec.filenames.contains(&file_name))
    {
        return Some(spec);
    }

    let ext = path.extension()?.to_str()?;
    languages()
        .iter()
        .find(|spec| spec.extensions.contains(&ext))
}

/// Case-insensitive lookup by language name.
pub fn find_by_name(name: &str) -> Option<&'static LanguageSpec> {
    languages()
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
