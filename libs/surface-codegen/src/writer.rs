//! Text emission with import management for generated test sources.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Imports that fit on one line up to this width are not wrapped.
const IMPORT_LINE_WIDTH: usize = 120;
const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ImportName {
    name: String,
    alias: Option<String>,
}

impl ImportName {
    fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

impl Ord for ImportName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.alias.cmp(&other.alias))
    }
}

impl PartialOrd for ImportName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
struct ModuleImports {
    default: Option<String>,
    named: BTreeSet<ImportName>,
}

/// Import statements grouped by module; each name is imported once.
#[derive(Debug, Default)]
pub struct ImportDeclarations {
    modules: BTreeMap<String, ModuleImports>,
}

impl ImportDeclarations {
    pub fn add_named(&mut self, name: &str, alias: Option<&str>, module: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .named
            .insert(ImportName {
                name: name.to_string(),
                alias: alias.map(String::from),
            });
    }

    pub fn add_default(&mut self, name: &str, module: &str) {
        self.modules.entry(module.to_string()).or_default().default = Some(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Package imports first, then relative imports, separated by a blank line.
    pub fn render(&self) -> String {
        let (relative, packages): (Vec<_>, Vec<_>) =
            self.modules.iter().partition(|(module, _)| module.starts_with('.'));

        let groups: Vec<String> = [packages, relative]
            .into_iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                group
                    .into_iter()
                    .map(|(module, imports)| render_module(module, imports))
                    .collect::<String>()
            })
            .collect();

        groups.join("\n")
    }
}

fn render_module(module: &str, imports: &ModuleImports) -> String {
    let mut code = String::new();

    if let Some(default) = &imports.default {
        code.push_str(&format!("import {} from \"{}\";\n", default, module));
    }

    if imports.named.is_empty() {
        return code;
    }

    let names: Vec<String> = imports.named.iter().map(ImportName::render).collect();
    let single = format!("import {{ {} }} from \"{}\";", names.join(", "), module);
    if single.len() <= IMPORT_LINE_WIDTH {
        code.push_str(&single);
        code.push('\n');
    } else {
        code.push_str("import {\n");
        for name in names {
            code.push_str(&format!("{INDENT}{name},\n"));
        }
        code.push_str(&format!("}} from \"{}\";\n", module));
    }
    code
}

/// Line-oriented source writer.
///
/// Body text and imports are collected separately and joined by [`CodeWriter::render`].
#[derive(Debug, Default)]
pub struct CodeWriter {
    banner: Option<String>,
    imports: ImportDeclarations,
    body: String,
    indent: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A comment line placed at the very top of the file.
    pub fn with_banner(mut self, banner: Option<&str>) -> Self {
        self.banner = banner.map(String::from);
        self
    }

    pub fn add_import(&mut self, name: &str, alias: Option<&str>, module: &str) -> &mut Self {
        self.imports.add_named(name, alias, module);
        self
    }

    pub fn add_default_import(&mut self, name: &str, module: &str) -> &mut Self {
        self.imports.add_default(name, module);
        self
    }

    /// Write text at the current indentation. Multi-line text is indented line by line.
    pub fn write(&mut self, text: impl AsRef<str>) -> &mut Self {
        for line in text.as_ref().lines() {
            if !line.is_empty() {
                for _ in 0..self.indent {
                    self.body.push_str(INDENT);
                }
                self.body.push_str(line);
            }
            self.body.push('\n');
        }
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.body.push('\n');
        self
    }

    pub fn indent(&mut self, levels: usize) -> &mut Self {
        self.indent += levels;
        self
    }

    pub fn dedent(&mut self, levels: usize) -> &mut Self {
        self.indent = self.indent.saturating_sub(levels);
        self
    }

    /// Write `open`, run `f` one level deeper, then write `close`.
    pub fn open_block(&mut self, open: &str, close: &str, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.write(open);
        self.indent(1);
        f(self);
        self.dedent(1);
        self.write(close)
    }

    pub fn render(&self) -> String {
        let mut code = String::new();
        if let Some(banner) = &self.banner {
            code.push_str(banner);
            code.push('\n');
        }
        if !self.imports.is_empty() {
            code.push_str(&self.imports.render());
            code.push('\n');
        }
        code.push_str(&self.body);
        code
    }
}
