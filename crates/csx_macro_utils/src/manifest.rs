use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The parsed `Cargo.toml` of the crate currently invoking a proc-macro.
///
/// Generated code must name workspace crates the way the *calling* crate
/// sees them. A crate depending on `csx_reflect` directly writes
/// `::csx_reflect`, while one depending only on the `csx_core` facade
/// writes `::csx_core::reflect`.
///
/// ```rust
/// # use csx_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("csx_reflect"));
/// ```
///
/// # Resolution
///
/// `dependencies` is searched first, then `dev-dependencies`:
///
/// 1. `name` itself is listed: `::name`.
/// 2. `name` starts with `csx_` and the facade `csx_core` is listed:
///    `::csx_core::<name without prefix>`.
///
/// When neither table matches, `::name` is returned.
///
/// A crate that refers to itself from doctests should declare
/// `extern crate self as name;` so that `::name` also resolves inside it.
#[derive(Debug)]
pub struct Manifest {
    document: Document<Box<str>>,
    modified: Option<SystemTime>,
}

const FACADE_CRATE: &str = "csx_core";
const WORKSPACE_PREFIX: &str = "csx_";

impl Manifest {
    fn locate() -> PathBuf {
        let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
            panic!("`CARGO_MANIFEST_DIR` is not set; proc-macros must run under cargo");
        };
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        path
    }

    fn load(path: &PathBuf, modified: Option<SystemTime>) -> Self {
        let text = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("cannot read `{}`: {err}", path.display()));
        let document = Document::parse(text.into_boxed_str())
            .unwrap_or_else(|err| panic!("cannot parse `{}`: {err}", path.display()));
        Self { document, modified }
    }

    fn path_of(segments: &[&str]) -> syn::Path {
        let text = segments.iter().fold(String::new(), |mut acc, seg| {
            acc.push_str("::");
            acc.push_str(seg);
            acc
        });
        syn::parse_str(&text)
            .unwrap_or_else(|err| panic!("`{text}` is not a valid path: {err}"))
    }

    fn lookup(table: &Table, name: &str) -> Option<syn::Path> {
        if table.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        table
            .contains_key(FACADE_CRATE)
            .then(|| Self::path_of(&[FACADE_CRATE, module]))
    }

    /// Resolves the path under which the caller reaches crate `name`.
    ///
    /// See the type-level documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|key| match self.document.get(key) {
                Some(Item::Table(table)) => Self::lookup(table, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::path_of(&[name]))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::locate();
        let modified = fs::metadata(&path).and_then(|meta| meta.modified()).ok();

        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified == modified
                && modified.is_some()
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified);
        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            document: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified: None,
        }
    }

    fn render(path: syn::Path) -> String {
        path.to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\ncsx_reflect = \"0.0.1\"\n");
        assert_eq!(render(m.get_crate_path("csx_reflect")), "::csx_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dev-dependencies]\ncsx_core = { path = \"..\" }\n");
        assert_eq!(render(m.get_crate_path("csx_reflect")), "::csx_core::reflect");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(render(m.get_crate_path("csx_reflect")), "::csx_reflect");
    }
}
