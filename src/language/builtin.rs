//! Built-in rule table.
//!
//! String rules follow each language's reference: which quotes may span lines,
//! which forms are raw, and how a closing quote is escaped.

use super::{BlockComment, Language, LanguageRules, LineComment, StringDelimiter};

pub(super) fn languages() -> Vec<Language> {
    let mut languages = c_family();
    languages.extend(jvm_and_dotnet());
    languages.extend(modern_systems());
    languages.extend(scripting());
    languages.extend(functional());
    languages.extend(data_and_markup());
    languages.extend(legacy_and_hardware());
    languages
}

fn c_like() -> LanguageRules {
    LanguageRules::new(&["//"], &[("/*", "*/")])
}

fn double_and_char() -> Vec<StringDelimiter> {
    vec![StringDelimiter::quoted("\""), StringDelimiter::quoted("'")]
}

fn hash_line() -> LanguageRules {
    LanguageRules::new(&["#"], &[])
}

fn c_family() -> Vec<Language> {
    vec![
        Language::new("C", &["c", "h"], c_like().with_strings(double_and_char())),
        Language::new(
            "C++",
            &["cpp", "hpp", "cc", "cxx", "hxx", "hh", "ipp"],
            c_like().with_strings(vec![
                StringDelimiter::cpp_raw(),
                StringDelimiter::quoted("\""),
                StringDelimiter::char_literal(),
            ]),
        )
        .with_aliases(&["cpp", "cplusplus"]),
        Language::new(
            "Objective-C",
            &["m", "mm"],
            c_like().with_strings(double_and_char()),
        )
        .with_aliases(&["objc"]),
        Language::new(
            "JavaScript",
            &["js", "mjs", "cjs", "jsx"],
            ecmascript(),
        )
        .with_aliases(&["js", "node"]),
        Language::new(
            "TypeScript",
            &["ts", "mts", "cts", "tsx"],
            ecmascript(),
        )
        .with_aliases(&["ts"]),
        Language::new(
            "Go",
            &["go"],
            c_like().with_strings(vec![
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
                StringDelimiter::quoted("`").raw().multiline(),
            ]),
        )
        .with_aliases(&["golang"]),
        Language::new(
            "PHP",
            &["php", "phtml"],
            c_like()
                .with_line_comments(vec![LineComment::new("#")])
                .with_strings(vec![
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::quoted("'").multiline(),
                    StringDelimiter::quoted("`").multiline(),
                ]),
        ),
    ]
}

fn ecmascript() -> LanguageRules {
    c_like().with_strings(vec![
        StringDelimiter::regex(),
        StringDelimiter::quoted("\""),
        StringDelimiter::quoted("'"),
        StringDelimiter::quoted("`").multiline(),
    ])
}

fn jvm_and_dotnet() -> Vec<Language> {
    vec![
        Language::new(
            "Java",
            &["java"],
            c_like().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").multiline(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
            ]),
        ),
        Language::new(
            "Kotlin",
            &["kt", "kts"],
            LanguageRules::new(&["//"], &[])
                .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"\"\"").raw().multiline(),
                    StringDelimiter::quoted("\""),
                    StringDelimiter::quoted("'"),
                ]),
        ),
        Language::new(
            "Scala",
            &["scala", "sc"],
            LanguageRules::new(&["//"], &[])
                .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"\"\"").raw().multiline(),
                    StringDelimiter::quoted("\""),
                    StringDelimiter::char_literal(),
                ]),
        ),
        Language::new(
            "Groovy",
            &["groovy", "gradle"],
            c_like().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").multiline(),
                StringDelimiter::quoted("'''").multiline(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
            ]),
        ),
        Language::new(
            "C#",
            &["cs", "csx"],
            c_like().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").raw().multiline(),
                StringDelimiter::new("$@\"", "\"").doubled().multiline(),
                StringDelimiter::new("@$\"", "\"").doubled().multiline(),
                StringDelimiter::new("@\"", "\"").doubled().multiline(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
            ]),
        )
        .with_aliases(&["csharp", "c-sharp"]),
        Language::new(
            "F#",
            &["fs", "fsi", "fsx"],
            LanguageRules::new(&["//"], &[])
                .with_block_comments(vec![BlockComment::new("(*", "*)").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"\"\"").raw().multiline(),
                    StringDelimiter::new("@\"", "\"").doubled().multiline(),
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::char_literal(),
                ]),
        )
        .with_aliases(&["fsharp"]),
        Language::new(
            "Dart",
            &["dart"],
            LanguageRules::new(&["//"], &[])
                .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("r\"\"\"").raw().multiline(),
                    StringDelimiter::quoted("r'''").raw().multiline(),
                    StringDelimiter::quoted("\"\"\"").multiline(),
                    StringDelimiter::quoted("'''").multiline(),
                    StringDelimiter::new("r\"", "\"").raw(),
                    StringDelimiter::new("r'", "'").raw(),
                    StringDelimiter::quoted("\""),
                    StringDelimiter::quoted("'"),
                ]),
        ),
    ]
}

fn modern_systems() -> Vec<Language> {
    vec![
        Language::new(
            "Rust",
            &["rs"],
            LanguageRules::new(&["//", "///", "//!"], &[])
                .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::rust_raw(),
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::char_literal(),
                ]),
        ),
        Language::new(
            "Swift",
            &["swift"],
            LanguageRules::new(&["//"], &[])
                .with_block_comments(vec![BlockComment::new("/*", "*/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::swift_extended(),
                    StringDelimiter::quoted("\"\"\"").multiline(),
                    StringDelimiter::quoted("\""),
                ]),
        ),
        Language::new(
            "Zig",
            &["zig"],
            LanguageRules::new(&["//"], &[]).with_strings(vec![
                StringDelimiter::new("\\\\", "").raw(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
            ]),
        ),
        Language::new(
            "Nim",
            &["nim", "nims", "nimble"],
            LanguageRules::new(&["#"], &[])
                .with_block_comments(vec![BlockComment::new("#[", "]#").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"\"\"").raw().multiline(),
                    StringDelimiter::quoted("\""),
                    StringDelimiter::char_literal(),
                ]),
        ),
        Language::new(
            "D",
            &["d", "di"],
            LanguageRules::new(&["//"], &[("/*", "*/")])
                .with_block_comments(vec![BlockComment::new("/+", "+/").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::new("r\"", "\"").raw().multiline(),
                    StringDelimiter::quoted("`").raw().multiline(),
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::quoted("'"),
                ]),
        )
        .with_aliases(&["dlang"]),
        Language::new(
            "Assembly",
            &["asm", "s", "nasm"],
            LanguageRules::new(&[";"], &[]).with_strings(double_and_char()),
        )
        .with_aliases(&["asm"]),
    ]
}

fn scripting() -> Vec<Language> {
    vec![
        Language::new(
            "Python",
            &["py", "pyi", "pyw"],
            hash_line().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").multiline(),
                StringDelimiter::quoted("'''").multiline(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'"),
            ]),
        )
        .with_aliases(&["py", "python3"]),
        Language::new(
            "Ruby",
            &["rb", "rake", "gemspec"],
            hash_line()
                .with_block_comments(vec![BlockComment::new("=begin", "=end").at_line_start()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::quoted("'").multiline(),
                    StringDelimiter::quoted("`").multiline(),
                ]),
        )
        .with_aliases(&["rb"])
        .with_filenames(&["Rakefile", "Gemfile"]),
        Language::new(
            "Perl",
            &["pl", "pm", "t"],
            hash_line()
                .with_block_comments(
                    ["=pod", "=head1", "=head2", "=begin", "=over"]
                        .iter()
                        .map(|start| BlockComment::new(start, "=cut").at_line_start())
                        .collect(),
                )
                .with_strings(vec![
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::quoted("'").multiline(),
                ]),
        ),
        Language::new(
            "Shell",
            &["sh", "bash", "zsh", "ksh", "fish"],
            LanguageRules::default()
                .with_line_comments(vec![LineComment::at_word_start("#")])
                .with_strings(vec![
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::quoted("'").raw().multiline(),
                    StringDelimiter::quoted("`").multiline(),
                ]),
        )
        .with_aliases(&["bash", "sh", "zsh"]),
        Language::new(
            "PowerShell",
            &["ps1", "psm1", "psd1"],
            LanguageRules::default()
                .with_line_comments(vec![LineComment::at_word_start("#")])
                .with_block_comments(vec![BlockComment::new("<#", "#>")])
                .with_strings(vec![
                    StringDelimiter::quoted("\"").with_escape('`').multiline(),
                    StringDelimiter::quoted("'").doubled().multiline(),
                ]),
        )
        .with_aliases(&["pwsh", "ps"]),
        Language::new(
            "Lua",
            &["lua"],
            LanguageRules::new(&["--"], &[])
                .with_block_comments(vec![BlockComment::lua_long_bracket()])
                .with_strings(vec![
                    StringDelimiter::lua_long_bracket(),
                    StringDelimiter::quoted("\""),
                    StringDelimiter::quoted("'"),
                ]),
        ),
        Language::new(
            "R",
            &["r", "rmd"],
            hash_line().with_strings(vec![
                StringDelimiter::quoted("\"").multiline(),
                StringDelimiter::quoted("'").multiline(),
            ]),
        ),
        Language::new(
            "Julia",
            &["jl"],
            hash_line()
                .with_block_comments(vec![BlockComment::new("#=", "=#").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"\"\"").multiline(),
                    StringDelimiter::quoted("\"").multiline(),
                ]),
        ),
        Language::new(
            "MATLAB",
            &["matlab"],
            LanguageRules::new(&["%"], &[])
                .with_block_comments(vec![
                    BlockComment::new("%{", "%}").with_nesting().at_line_start(),
                ])
                .with_strings(vec![StringDelimiter::quoted("\"").doubled()]),
        )
        .with_aliases(&["octave"]),
    ]
}

fn functional() -> Vec<Language> {
    vec![
        Language::new(
            "Haskell",
            &["hs", "lhs"],
            LanguageRules::new(&["--"], &[])
                .with_block_comments(vec![BlockComment::new("{-", "-}").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\""),
                    StringDelimiter::char_literal(),
                ]),
        ),
        Language::new(
            "OCaml",
            &["ml", "mli"],
            LanguageRules::default()
                .with_block_comments(vec![BlockComment::new("(*", "*)").with_nesting()])
                .with_strings(vec![
                    StringDelimiter::quoted("\"").multiline(),
                    StringDelimiter::char_literal(),
                ]),
        ),
        Language::new(
            "Elixir",
            &["ex", "exs"],
            hash_line().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").multiline(),
                StringDelimiter::quoted("'''").multiline(),
                StringDelimiter::quoted("\"").multiline(),
                StringDelimiter::quoted("'").multiline(),
            ]),
        ),
        Language::new(
            "Erlang",
            &["erl", "hrl"],
            LanguageRules::new(&["%"], &[]).with_strings(vec![
                StringDelimiter::quoted("\"").multiline(),
                StringDelimiter::quoted("'"),
            ]),
        ),
        Language::new(
            "Clojure",
            &["clj", "cljs", "cljc", "edn"],
            LanguageRules::new(&[";"], &[])
                .with_strings(vec![StringDelimiter::quoted("\"").multiline()]),
        ),
        Language::new(
            "Lisp",
            &["lisp", "lsp", "el", "scm", "ss", "rkt"],
            LanguageRules::new(&[";"], &[])
                .with_block_comments(vec![BlockComment::new("#|", "|#").with_nesting()])
                .with_strings(vec![StringDelimiter::quoted("\"").multiline()]),
        )
        .with_aliases(&["scheme", "racket", "elisp"]),
    ]
}

fn data_and_markup() -> Vec<Language> {
    vec![
        Language::new(
            "SQL",
            &["sql"],
            LanguageRules::new(&["--"], &[("/*", "*/")]).with_strings(vec![
                StringDelimiter::quoted("'").doubled().multiline(),
                StringDelimiter::quoted("\"").doubled().multiline(),
            ]),
        ),
        Language::new(
            "YAML",
            &["yaml", "yml"],
            LanguageRules::default()
                .with_line_comments(vec![LineComment::at_word_start("#")])
                .with_strings(vec![StringDelimiter::quoted("\"")]),
        ),
        Language::new(
            "TOML",
            &["toml"],
            hash_line().with_strings(vec![
                StringDelimiter::quoted("\"\"\"").multiline(),
                StringDelimiter::quoted("'''").raw().multiline(),
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'").raw(),
            ]),
        ),
        Language::new(
            "INI",
            &["ini", "cfg", "conf", "properties"],
            LanguageRules::new(&[";", "#"], &[]),
        ),
        Language::new("Makefile", &["mk", "mak"], hash_line())
        .with_aliases(&["make"])
        .with_filenames(&["Makefile", "makefile", "GNUmakefile"]),
        Language::new(
            "Dockerfile",
            &["dockerfile"],
            hash_line().with_strings(vec![
                StringDelimiter::quoted("\""),
                StringDelimiter::quoted("'").raw(),
            ]),
        )
        .with_aliases(&["docker"])
        .with_filenames(&["Dockerfile", "Containerfile"]),
        Language::new(
            "HTML",
            &["html", "htm", "xhtml", "vue", "svelte"],
            LanguageRules::new(&[], &[("<!--", "-->")]),
        ),
        Language::new(
            "XML",
            &["xml", "xsd", "xsl", "svg", "plist", "xaml"],
            LanguageRules::new(&[], &[("<!--", "-->")]),
        ),
        Language::new(
            "CSS",
            &["css"],
            LanguageRules::new(&[], &[("/*", "*/")]).with_strings(double_and_char()),
        ),
        Language::new(
            "SCSS",
            &["scss", "sass", "less"],
            c_like().with_strings(double_and_char()),
        )
        .with_aliases(&["less"]),
    ]
}

fn legacy_and_hardware() -> Vec<Language> {
    vec![
        Language::new(
            "Fortran",
            &["f90", "f95", "f03", "f08", "for"],
            LanguageRules::new(&["!"], &[]).with_strings(vec![
                StringDelimiter::quoted("\"").doubled(),
                StringDelimiter::quoted("'").doubled(),
            ]),
        ),
        Language::new(
            "Ada",
            &["adb", "ads", "ada"],
            LanguageRules::new(&["--"], &[]).with_strings(vec![
                StringDelimiter::quoted("\"").doubled(),
                StringDelimiter::char_literal(),
            ]),
        ),
        Language::new(
            "Pascal",
            &["pas", "pp", "dpr"],
            LanguageRules::new(&["//"], &[("{", "}"), ("(*", "*)")])
                .with_strings(vec![StringDelimiter::quoted("'").doubled()]),
        )
        .with_aliases(&["delphi"]),
        Language::new(
            "VHDL",
            &["vhd", "vhdl"],
            LanguageRules::new(&["--"], &[("/*", "*/")]).with_strings(vec![
                StringDelimiter::quoted("\"").doubled(),
                StringDelimiter::char_literal(),
            ]),
        ),
        Language::new(
            "Verilog",
            &["v", "vh", "sv", "svh"],
            c_like().with_strings(vec![StringDelimiter::quoted("\"")]),
        )
        .with_aliases(&["systemverilog"]),
    ]
}
