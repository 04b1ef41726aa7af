/// ---------------------------------------------------------------------------
///    Bundled dataset – generated from a single table
/// ---------------------------------------------------------------------------
///
/// A snapshot of the public language classification dataset, reduced to the
/// fields the indices need. Entries are kept in the source's declaration
/// order; that order is what ambiguous lookups return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledLanguage {
    pub name: &'static str,
    pub category: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub group: Option<&'static str>,
}

macro_rules! define_languages {
    ($(
        $name:literal, $category:ident,
        ext: [ $($ext:literal),* $(,)? ],
        files: [ $($file:literal),* $(,)? ],
        group: $group:expr
    ),* $(,)?) => {
        pub static BUNDLED_LANGUAGES: &[BundledLanguage] = &[
            $(
                BundledLanguage {
                    name: $name,
                    category: stringify!($category),
                    extensions: &[$($ext),*],
                    filenames: &[$($file),*],
                    group: $group,
                }
            ),*
        ];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Note: multi-dot extensions such as ".rs.in" are kept as published even
//    though path lookups only ever extract the final suffix.
// ---------------------------------------------------------------------------
define_languages! {
    "ABAP", programming,
        ext: [".abap"],
        files: [],
        group: None,

    "Ada", programming,
        ext: [".adb", ".ada", ".ads"],
        files: [],
        group: None,

    "Assembly", programming,
        ext: [".asm", ".a51", ".i", ".inc", ".nas", ".nasm"],
        files: [],
        group: None,

    "Batchfile", programming,
        ext: [".bat", ".cmd"],
        files: [],
        group: None,

    "C", programming,
        ext: [".c", ".cats", ".h", ".idc"],
        files: [],
        group: None,

    "C#", programming,
        ext: [".cs", ".cake", ".csx", ".linq"],
        files: [],
        group: None,

    "C++", programming,
        ext: [
            ".cpp", ".c++", ".cc", ".cp", ".cppm", ".cxx", ".h", ".h++", ".hh", ".hpp",
            ".hxx", ".inc", ".inl", ".ino", ".ipp", ".ixx", ".re", ".tcc", ".tpp", ".txx",
        ],
        files: [],
        group: None,

    "CMake", programming,
        ext: [".cmake", ".cmake.in"],
        files: ["CMakeLists.txt"],
        group: None,

    "CSS", markup,
        ext: [".css"],
        files: [],
        group: None,

    "CSV", data,
        ext: [".csv"],
        files: [],
        group: None,

    "Clojure", programming,
        ext: [".clj", ".bb", ".boot", ".cl2", ".cljc", ".cljs", ".cljs.hl", ".cljscm", ".cljx", ".hic"],
        files: ["riemann.config"],
        group: None,

    "CoffeeScript", programming,
        ext: ["._coffee", ".cake", ".cjsx", ".coffee", ".iced"],
        files: ["Cakefile"],
        group: None,

    "Common Lisp", programming,
        ext: [".lisp", ".asd", ".cl", ".l", ".lsp", ".ny", ".podsl", ".sexp"],
        files: [],
        group: None,

    "Coq", programming,
        ext: [".coq", ".v"],
        files: [],
        group: None,

    "Dart", programming,
        ext: [".dart"],
        files: [],
        group: None,

    "Diff", data,
        ext: [".diff", ".patch"],
        files: [],
        group: None,

    "Dockerfile", programming,
        ext: [".dockerfile", ".containerfile"],
        files: ["Containerfile", "Dockerfile"],
        group: None,

    "EditorConfig", data,
        ext: [],
        files: [".editorconfig"],
        group: Some("INI"),

    "Elixir", programming,
        ext: [".ex", ".exs"],
        files: ["mix.lock"],
        group: None,

    "Elm", programming,
        ext: [".elm"],
        files: [],
        group: None,

    "Erlang", programming,
        ext: [".erl", ".app", ".app.src", ".es", ".escript", ".hrl", ".xrl", ".yrl"],
        files: ["Emakefile", "rebar.config", "rebar.config.lock", "rebar.lock"],
        group: None,

    "F#", programming,
        ext: [".fs", ".fsi", ".fsx"],
        files: [],
        group: None,

    "Forth", programming,
        ext: [".fth", ".4th", ".f", ".for", ".forth", ".fr", ".frt", ".fs"],
        files: [],
        group: None,

    "Fortran", programming,
        ext: [".f", ".f77", ".for", ".fpp"],
        files: [],
        group: None,

    "GCC Machine Description", programming,
        ext: [".md"],
        files: [],
        group: None,

    "GLSL", programming,
        ext: [
            ".glsl", ".fp", ".frag", ".frg", ".fs", ".fsh", ".fshader", ".geo", ".geom",
            ".glslf", ".glslv", ".gs", ".gshader", ".shader", ".tesc", ".tese", ".vert",
            ".vrx", ".vs", ".vsh", ".vshader",
        ],
        files: [],
        group: None,

    "Git Config", data,
        ext: [".gitconfig"],
        files: [".gitconfig", ".gitmodules"],
        group: Some("INI"),

    "Go", programming,
        ext: [".go"],
        files: [],
        group: None,

    "Go Module", data,
        ext: [],
        files: ["go.mod"],
        group: None,

    "GraphQL", data,
        ext: [".graphql", ".gql", ".graphqls"],
        files: [],
        group: None,

    "Groovy", programming,
        ext: [".groovy", ".grt", ".gtpl", ".gvy"],
        files: ["Jenkinsfile"],
        group: None,

    "HTML", markup,
        ext: [".html", ".hta", ".htm", ".html.hl", ".inc", ".xht", ".xhtml"],
        files: [],
        group: None,

    "HTML+ERB", markup,
        ext: [".erb", ".erb.deface", ".rhtml"],
        files: [],
        group: Some("HTML"),

    "Haskell", programming,
        ext: [".hs", ".hs-boot", ".hsc"],
        files: [],
        group: None,

    "INI", data,
        ext: [".ini", ".cfg", ".cnf", ".dof", ".lektorproject", ".prefs", ".pro", ".properties", ".url"],
        files: [".coveragerc", ".flake8", ".pylintrc", "HOSTS", "buildozer.spec", "hosts", "pylintrc", "vlcrc"],
        group: None,

    "Ignore List", data,
        ext: [".gitignore"],
        files: [
            ".atomignore", ".babelignore", ".bzrignore", ".coffeelintignore", ".cvsignore",
            ".dockerignore", ".eleventyignore", ".eslintignore", ".gitignore",
            ".markdownlintignore", ".nodemonignore", ".npmignore", ".prettierignore",
            ".stylelintignore", ".vercelignore", ".vscodeignore", "gitignore-global",
            "gitignore_global",
        ],
        group: Some("INI"),

    "JSON", data,
        ext: [
            ".json", ".4DForm", ".4DProject", ".avsc", ".geojson", ".gltf", ".har", ".ice",
            ".JSON-tmLanguage", ".jsonl", ".mcmeta", ".tfstate", ".tfstate.backup",
            ".topojson", ".webapp", ".webmanifest", ".yy", ".yyp",
        ],
        files: [
            ".all-contributorsrc", ".arcconfig", ".auto-changelog", ".c8rc", ".htmlhintrc",
            ".imgbotconfig", ".nycrc", ".tern-config", ".tern-project", ".watchmanconfig",
            "Pipfile.lock", "composer.lock", "deno.lock", "flake.lock", "mcmod.info",
        ],
        group: None,

    "JSON with Comments", data,
        ext: [
            ".jsonc", ".code-snippets", ".code-workspace", ".sublime-build",
            ".sublime-commands", ".sublime-completions", ".sublime-keymap",
            ".sublime-macro", ".sublime-menu", ".sublime-mousemap", ".sublime-project",
            ".sublime-settings", ".sublime-theme", ".sublime-workspace", ".sublime_metrics",
            ".sublime_session",
        ],
        files: [
            ".babelrc", ".devcontainer.json", ".eslintrc.json", ".jscsrc", ".jshintrc",
            ".jslintrc", ".swcrc", "api-extractor.json", "devcontainer.json",
            "jsconfig.json", "language-configuration.json", "tsconfig.json", "tslint.json",
        ],
        group: Some("JSON"),

    "JSON5", data,
        ext: [".json5"],
        files: [],
        group: None,

    "Java", programming,
        ext: [".java", ".jav", ".jsh"],
        files: [],
        group: None,

    "JavaScript", programming,
        ext: [
            ".js", "._js", ".bones", ".cjs", ".es", ".es6", ".frag", ".gs", ".jake",
            ".javascript", ".jsb", ".jscad", ".jsfl", ".jslib", ".jsm", ".jspre", ".jss",
            ".jsx", ".mjs", ".njs", ".pac", ".sjs", ".ssjs", ".xsjs", ".xsjslib",
        ],
        files: ["Jakefile"],
        group: None,

    "Jupyter Notebook", markup,
        ext: [".ipynb"],
        files: ["Notebook"],
        group: None,

    "Kotlin", programming,
        ext: [".kt", ".ktm", ".kts"],
        files: [],
        group: None,

    "Less", markup,
        ext: [".less"],
        files: [],
        group: None,

    "Limbo", programming,
        ext: [".b", ".m"],
        files: [],
        group: None,

    "Lua", programming,
        ext: [".lua", ".fcgi", ".nse", ".p8", ".pd_lua", ".rbxs", ".rockspec", ".wlua"],
        files: [".luacheckrc"],
        group: None,

    "MATLAB", programming,
        ext: [".matlab", ".m"],
        files: [],
        group: None,

    "Makefile", programming,
        ext: [".mak", ".d", ".make", ".makefile", ".mk", ".mkfile"],
        files: [
            "BSDmakefile", "GNUmakefile", "Kbuild", "Makefile", "Makefile.am", "Makefile.boot",
            "Makefile.frag", "Makefile.in", "Makefile.inc", "Makefile.wat", "makefile",
            "makefile.sco", "mkfile",
        ],
        group: None,

    "Markdown", prose,
        ext: [
            ".md", ".livemd", ".markdown", ".mdown", ".mdwn", ".mkd", ".mkdn", ".mkdown",
            ".ronn", ".scd", ".workbook",
        ],
        files: ["contents.lr"],
        group: None,

    "Mercury", programming,
        ext: [".m", ".moo"],
        files: [],
        group: None,

    "Nix", programming,
        ext: [".nix"],
        files: [],
        group: None,

    "OCaml", programming,
        ext: [".ml", ".eliom", ".eliomi", ".ml4", ".mli", ".mll", ".mly"],
        files: [],
        group: None,

    "Objective-C", programming,
        ext: [".m", ".h"],
        files: [],
        group: None,

    "PHP", programming,
        ext: [".php", ".aw", ".ctp", ".fcgi", ".inc", ".php3", ".php4", ".php5", ".phps", ".phpt"],
        files: [".php", ".php_cs", ".php_cs.dist", "Phakefile"],
        group: None,

    "PLSQL", programming,
        ext: [
            ".pls", ".bdy", ".ddl", ".fnc", ".pck", ".pkb", ".pks", ".plb", ".plsql", ".prc",
            ".spc", ".sql", ".tpb", ".tps", ".trg", ".vw",
        ],
        files: [],
        group: None,

    "PLpgSQL", programming,
        ext: [".pgsql", ".sql"],
        files: [],
        group: None,

    "Perl", programming,
        ext: [".pl", ".al", ".cgi", ".fcgi", ".perl", ".ph", ".plx", ".pm", ".psgi", ".t"],
        files: [".latexmkrc", "Makefile.PL", "Rexfile", "ack", "cpanfile", "latexmkrc"],
        group: None,

    "Pip Requirements", data,
        ext: [],
        files: ["requirements-dev.txt", "requirements.txt"],
        group: None,

    "PowerShell", programming,
        ext: [".ps1", ".psd1", ".psm1"],
        files: [],
        group: None,

    "Prolog", programming,
        ext: [".pl", ".plt", ".pro", ".prolog", ".yap"],
        files: [],
        group: None,

    "Protocol Buffer", data,
        ext: [".proto"],
        files: [],
        group: None,

    "Python", programming,
        ext: [
            ".py", ".cgi", ".fcgi", ".gyp", ".gypi", ".lmi", ".py3", ".pyde", ".pyi", ".pyp",
            ".pyt", ".pyw", ".rpy", ".spec", ".tac", ".wsgi", ".xpy",
        ],
        files: [".gclient", "DEPS", "SConscript", "SConstruct", "wscript"],
        group: None,

    "R", programming,
        ext: [".r", ".rd", ".rsx"],
        files: [".Rprofile", "expr-dist"],
        group: None,

    "Raku", programming,
        ext: [".6pl", ".6pm", ".nqp", ".p6", ".p6l", ".p6m", ".pl6", ".pm6", ".raku", ".rakumod", ".t"],
        files: [],
        group: None,

    "RenderScript", programming,
        ext: [".rs", ".rsh"],
        files: [],
        group: None,

    "Ruby", programming,
        ext: [
            ".rb", ".builder", ".eye", ".fcgi", ".gemspec", ".god", ".jbuilder", ".mspec",
            ".pluginspec", ".podspec", ".prawn", ".rabl", ".rake", ".rbi", ".rbuild", ".rbw",
            ".rbx", ".ru", ".ruby", ".spec", ".thor", ".watchr",
        ],
        files: [
            ".irbrc", ".pryrc", ".simplecov", "Appraisals", "Berksfile", "Brewfile",
            "Buildfile", "Capfile", "Dangerfile", "Deliverfile", "Fastfile", "Gemfile",
            "Guardfile", "Jarfile", "Mavenfile", "Podfile", "Puppetfile", "Rakefile",
            "Snapfile", "Steepfile", "Thorfile", "Vagrantfile", "buildfile",
        ],
        group: None,

    "Rust", programming,
        ext: [".rs", ".rs.in"],
        files: [],
        group: None,

    "SCSS", markup,
        ext: [".scss"],
        files: [],
        group: None,

    "SQL", data,
        ext: [".sql", ".cql", ".ddl", ".inc", ".mysql", ".prc", ".tab", ".udf", ".viw"],
        files: [],
        group: None,

    "Sass", markup,
        ext: [".sass"],
        files: [],
        group: None,

    "Scala", programming,
        ext: [".scala", ".kojo", ".sbt", ".sc"],
        files: [],
        group: None,

    "Shell", programming,
        ext: [
            ".sh", ".bash", ".bats", ".cgi", ".command", ".fcgi", ".ksh", ".sh.in", ".tmux",
            ".tool", ".trigger", ".zsh", ".zsh-theme",
        ],
        files: [
            ".bash_aliases", ".bash_functions", ".bash_history", ".bash_logout",
            ".bash_profile", ".bashrc", ".cshrc", ".envrc", ".flaskenv", ".kshrc", ".login",
            ".profile", ".tmux.conf", ".zlogin", ".zlogout", ".zprofile", ".zshenv", ".zshrc",
            "9fs", "PKGBUILD", "bash_aliases", "bash_logout", "bash_profile", "bashrc",
            "cshrc", "gradlew", "kshrc", "login", "man", "profile", "tmux.conf", "zlogin",
            "zlogout", "zprofile", "zshenv", "zshrc",
        ],
        group: None,

    "Svelte", markup,
        ext: [".svelte"],
        files: [],
        group: None,

    "Swift", programming,
        ext: [".swift"],
        files: [],
        group: None,

    "TOML", data,
        ext: [".toml"],
        files: ["Cargo.lock", "Cargo.toml.orig", "Gopkg.lock", "Pipfile", "pdm.lock", "poetry.lock", "uv.lock"],
        group: None,

    "TSQL", programming,
        ext: [".sql", ".udf"],
        files: [],
        group: None,

    "TSX", programming,
        ext: [".tsx"],
        files: [],
        group: Some("TypeScript"),

    "TeX", markup,
        ext: [
            ".tex", ".aux", ".bbx", ".cbx", ".cls", ".dtx", ".ins", ".lbx", ".ltx", ".mkii",
            ".mkiv", ".mkvi", ".sty", ".toc",
        ],
        files: [],
        group: None,

    "Text", prose,
        ext: [".txt", ".fr", ".nb", ".ncl", ".no"],
        files: [
            "CITATION", "CITATIONS", "COPYING", "COPYING.regex", "COPYRIGHT.regex", "FONTLOG",
            "INSTALL", "INSTALL.mysql", "LICENSE", "LICENSE.mysql", "NEWS", "README.me",
            "README.mysql", "README.nss", "click.me", "delete.me", "keep.me", "package.mask",
            "package.use.mask", "package.use.stable.mask", "read.me", "readme.1st", "test.me",
            "use.mask", "use.stable.mask",
        ],
        group: None,

    "TypeScript", programming,
        ext: [".ts", ".cts", ".mts"],
        files: [],
        group: None,

    "V", programming,
        ext: [".v", ".vsh"],
        files: [],
        group: None,

    "Verilog", programming,
        ext: [".v", ".veo"],
        files: [],
        group: None,

    "Vim Script", programming,
        ext: [".vim", ".vba", ".vimrc", ".vmb"],
        files: [".exrc", ".gvimrc", ".nvimrc", ".vimrc", "_vimrc", "gvimrc", "nvimrc", "vimrc"],
        group: None,

    "Vue", markup,
        ext: [".vue"],
        files: [],
        group: None,

    "XML", data,
        ext: [
            ".xml", ".adml", ".admx", ".ant", ".axaml", ".axml", ".builds", ".ccxml",
            ".clixml", ".cproject", ".csl", ".csproj", ".ct", ".dita", ".ditamap",
            ".ditaval", ".dll.config", ".filters", ".fsproj", ".fxml", ".glade", ".gml",
            ".iml", ".ivy", ".jelly", ".kml", ".launch", ".mjml", ".mm", ".mod", ".mxml",
            ".natvis", ".ncl", ".nuspec", ".osm", ".plist", ".props", ".ps1xml", ".rdf",
            ".res", ".resx", ".rs", ".rss", ".sch", ".scxml", ".storyboard", ".targets",
            ".ts", ".tsx", ".ui", ".vbproj", ".vcxproj", ".vsixmanifest", ".wsdl", ".wxs",
            ".xaml", ".xib", ".xlf", ".xliff", ".xsd", ".xul", ".zcml",
        ],
        files: [
            ".classpath", ".cproject", ".project", "App.config", "NuGet.config",
            "Settings.StyleCop", "Web.Debug.config", "Web.Release.config", "Web.config",
            "packages.config",
        ],
        group: None,

    "YAML", data,
        ext: [
            ".yml", ".mir", ".reek", ".rviz", ".sublime-syntax", ".syntax", ".yaml",
            ".yaml-tmlanguage", ".yaml.sed", ".yml.mysql",
        ],
        files: [".clang-format", ".clang-tidy", ".gemrc", "CITATION.cff", "glide.lock", "yarn.lock"],
        group: None,

    "Zig", programming,
        ext: [".zig", ".zig.zon"],
        files: [],
        group: None,
}

/// Look up a bundled entry by its exact display name.
pub fn bundled_language(name: &str) -> Option<&'static BundledLanguage> {
    BUNDLED_LANGUAGES.iter().find(|l| l.name == name)
}
