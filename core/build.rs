use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct SiteFile {
    course_title: String,
    tagline: Option<String>,
    hero: String,
    resources: Vec<ResourceEntry>,
}

#[derive(Deserialize)]
struct ResourceEntry {
    id: String,
    kind: String,
    url: String,
    title: String,
    #[serde(default)]
    preload: bool,
    #[serde(default)]
    page: bool,
    height: Option<u32>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=SITE_MANIFEST_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let site_path = resolve_site_path(workspace_root);
    println!("cargo:rerun-if-changed={}", site_path.display());

    let contents = fs::read_to_string(&site_path).unwrap_or_else(|err| {
        panic!("failed to read site manifest at {}: {err}", site_path.display())
    });

    let site: SiteFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!("failed to parse site manifest at {}: {err}", site_path.display())
    });

    if site.course_title.is_empty() {
        panic!("course_title cannot be empty in {}", site_path.display());
    }
    if site.resources.is_empty() {
        panic!("site manifest {} has no resources", site_path.display());
    }

    validate_entries(&site.resources, &site_path);

    let hero = site.hero.as_str();
    let hero_entry = site
        .resources
        .iter()
        .find(|entry| entry.id == hero)
        .unwrap_or_else(|| {
            panic!("hero '{}' not found in {}", hero, site_path.display())
        });
    if !hero_entry.kind.trim().eq_ignore_ascii_case("scene") {
        panic!(
            "hero '{}' must be a scene, found '{}' in {}",
            hero,
            hero_entry.kind,
            site_path.display()
        );
    }

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const COURSE_TITLE: &str = {};",
        rust_string(site.course_title.trim())
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const COURSE_TAGLINE: &str = {};",
        rust_string(site.tagline.as_deref().unwrap_or("").trim())
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const HERO_RESOURCE_ID: &str = {};",
        rust_string(hero)
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const RESOURCE_CATALOG: &[CatalogEntry] = &[").unwrap();

    for entry in &site.resources {
        writeln!(&mut output, "    CatalogEntry {{").unwrap();
        writeln!(&mut output, "        id: {},", rust_string(&entry.id)).unwrap();
        writeln!(&mut output, "        kind: ResourceKind::{},", kind_variant(&entry.kind)).unwrap();
        writeln!(&mut output, "        url: {},", rust_string(&entry.url)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(entry.title.trim())).unwrap();
        writeln!(&mut output, "        preload: {},", entry.preload).unwrap();
        writeln!(&mut output, "        page: {},", entry.page).unwrap();
        match entry.height {
            Some(height) => writeln!(&mut output, "        height: {},", height).unwrap(),
            None => writeln!(&mut output, "        height: DEFAULT_EMBED_HEIGHT,").unwrap(),
        }
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("site_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_site_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SITE_MANIFEST_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("site.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn kind_variant(kind: &str) -> &'static str {
    let kind = kind.trim();
    if kind.eq_ignore_ascii_case("scene") {
        "Scene"
    } else if kind.eq_ignore_ascii_case("document") {
        "Document"
    } else {
        panic!("unknown resource kind '{kind}'")
    }
}

fn validate_entries(entries: &[ResourceEntry], site_path: &Path) {
    let mut ids = HashSet::new();

    for entry in entries {
        let id = entry.id.as_str();
        if id.is_empty() {
            panic!("resource id cannot be empty in {}", site_path.display());
        }
        if entry.title.is_empty() {
            panic!("resource '{}' title cannot be empty in {}", id, site_path.display());
        }
        if entry.url.is_empty() {
            panic!("resource '{}' url cannot be empty in {}", id, site_path.display());
        }
        if !matches!(
            entry.kind.trim().to_ascii_lowercase().as_str(),
            "scene" | "document"
        ) {
            panic!(
                "resource '{}' has unknown kind '{}' in {}",
                id,
                entry.kind,
                site_path.display()
            );
        }
        if entry.height == Some(0) {
            panic!("resource '{}' has zero height in {}", id, site_path.display());
        }
        if !ids.insert(id) {
            panic!("duplicate resource id '{}' in {}", id, site_path.display());
        }
    }
}
