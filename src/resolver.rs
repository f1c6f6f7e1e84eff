use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::imports::extract_imports;
use crate::remapping::{best_match, Remapping};

/// One source file as supplied by the caller. The resolver only reads.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourceFile {
    pub content: String,
}

impl SourceFile {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Repository-relative forward-slash path to source file. Ordered so
/// that traversal tie-breaks and output are deterministic.
pub type SourceMap = BTreeMap<String, SourceFile>;

/// Collapses `.` and `..` segments of a forward-slash path.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().map_or(false, |last| *last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn resolve_relative(import_ref: &str, current_file: &str) -> String {
    let directory = current_file
        .rsplit_once('/')
        .map_or("", |(directory, _)| directory);
    normalize_path(&format!("{directory}/{import_ref}"))
}

/// Last-resort lookup by base filename. A candidate is accepted when at
/// most one non-final segment of the import path is missing from the
/// candidate's segments; the first match in map order wins. Ambiguous
/// by construction, kept as best-effort.
fn filename_fallback<'a>(
    import_ref: &str,
    available: &'a SourceMap,
) -> Option<(String, &'a SourceFile)> {
    let (directories, base) = import_ref
        .rsplit_once('/')
        .map_or(("", import_ref), |(directories, base)| (directories, base));
    let import_segments: Vec<&str> = directories
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect();

    for (path, file) in available {
        if path.rsplit('/').next() != Some(base) {
            continue;
        }
        let candidate_segments: HashSet<&str> = path.split('/').collect();
        let mismatches = import_segments
            .iter()
            .filter(|segment| !candidate_segments.contains(*segment))
            .count();
        if mismatches <= 1 {
            return Some((path.clone(), file));
        }
    }
    None
}

/// Resolves one import string to a path in `available`.
///
/// Strategies are tried in order, first hit wins: direct key lookup,
/// relative to the importing file, remapped through the longest
/// matching rule, and finally base-filename fallback. Returns `None`
/// when every strategy misses.
pub fn resolve_import<'a>(
    import_ref: &str,
    current_file: &str,
    remappings: &[Remapping],
    available: &'a SourceMap,
) -> Option<(String, &'a SourceFile)> {
    if let Some((path, file)) = available.get_key_value(import_ref) {
        return Some((path.clone(), file));
    }

    if import_ref.starts_with("./") || import_ref.starts_with("../") {
        let normalized = resolve_relative(import_ref, current_file);
        if let Some((path, file)) = available.get_key_value(&normalized) {
            return Some((path.clone(), file));
        }
    }

    if let Some(remapping) = best_match(remappings, import_ref) {
        let remapped = remapping.apply(import_ref);
        if let Some((path, file)) = available.get_key_value(&remapped) {
            return Some((path.clone(), file));
        }
    }

    filename_fallback(import_ref, available)
}

/// Caller files re-keyed under their canonical paths: files matched by
/// a remapping rule appear under the rewritten alias path, everything
/// else under its original path. Aliases shadow colliding originals.
struct CanonicalSources {
    lookup: SourceMap,
    aliased: Vec<String>,
    plain: Vec<String>,
}

fn canonicalize(available: &SourceMap, remappings: &[Remapping]) -> CanonicalSources {
    let mut aliases: SourceMap = BTreeMap::new();
    let mut originals: SourceMap = BTreeMap::new();
    let mut aliased: Vec<String> = Vec::new();

    for (path, file) in available {
        match best_match(remappings, path) {
            Some(remapping) => {
                let alias = remapping.apply(path);
                debug!("remapping source {path} to {alias}");
                aliased.push(alias.clone());
                aliases.insert(alias, file.clone());
            }
            None => {
                originals.insert(path.clone(), file.clone());
            }
        }
    }

    let plain = originals.keys().cloned().collect();
    let mut lookup = originals;
    for (path, file) in aliases {
        lookup.insert(path, file);
    }

    CanonicalSources {
        lookup,
        aliased,
        plain,
    }
}

fn traverse(seeds: VecDeque<String>, lookup: &SourceMap, remappings: &[Remapping]) -> SourceMap {
    let mut queue = seeds;
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut closure: SourceMap = BTreeMap::new();

    while let Some(path) = queue.pop_front() {
        if !visited.insert(path.clone()) {
            continue;
        }
        let Some(file) = lookup.get(&path) else {
            continue;
        };
        closure.insert(path.clone(), file.clone());

        for import_ref in extract_imports(&file.content) {
            match resolve_import(&import_ref, &path, remappings, lookup) {
                Some((target, _)) => {
                    if !visited.contains(&target) {
                        debug!("{path} imports {import_ref} -> {target}");
                        queue.push_back(target);
                    }
                }
                None => {
                    warn!("unresolved import '{import_ref}' referenced from {path}");
                }
            }
        }
    }

    closure
}

/// Builds the necessary file set seeded from every available file:
/// remapped alias paths are enqueued first, then every original path
/// without a remapped alias. With remappings in play this
/// canonicalizes keys and drops shadowed duplicates; reachability does
/// the rest.
#[must_use]
pub fn build_closure(available: &SourceMap, remappings: &[Remapping]) -> SourceMap {
    let canonical = canonicalize(available, remappings);
    let seeds: VecDeque<String> = canonical
        .aliased
        .iter()
        .chain(canonical.plain.iter())
        .cloned()
        .collect();
    traverse(seeds, &canonical.lookup, remappings)
}

/// Builds the necessary file set from explicit entry files: every file
/// transitively imported from a seed, and nothing else. Seeds that
/// don't exist in the available set are skipped without a diagnostic.
#[must_use]
pub fn build_closure_from<I>(seeds: I, available: &SourceMap, remappings: &[Remapping]) -> SourceMap
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let canonical = canonicalize(available, remappings);

    // Same ordering rule as the derived seeding: alias forms first.
    let mut aliased: Vec<String> = Vec::new();
    let mut plain: Vec<String> = Vec::new();
    for seed in seeds {
        let seed = seed.as_ref();
        match best_match(remappings, seed) {
            Some(remapping) => aliased.push(remapping.apply(seed)),
            None => plain.push(seed.to_string()),
        }
    }

    let queue: VecDeque<String> = aliased.into_iter().chain(plain).collect();
    traverse(queue, &canonical.lookup, remappings)
}
