use std::fs;
use std::path::Path;

use tempfile::TempDir;
use viperx_adapters::{
    BundledSource, DirectorySource, MemoryFilesystem, MemorySource, MiniJinjaRenderer,
    source::{BUNDLED, USER},
};
use viperx_core::{
    application::ports::TemplateRenderer,
    domain::{License, ModelFramework, ProjectKind, ProjectSpec, RenderContext, TemplateName},
    error::ErrorCategory,
    prelude::*,
};

fn resolver(user_dir: &Path) -> LayeredResolver {
    LayeredResolver::new(vec![
        Box::new(DirectorySource::new(USER, user_dir)),
        Box::new(BundledSource::new()),
    ])
    .unwrap()
}

fn specs() -> Vec<ProjectSpec> {
    vec![
        ProjectSpec::builder("plain").build().unwrap(),
        ProjectSpec::builder("lean")
            .use_env(false)
            .use_config(false)
            .use_tests(false)
            .license(License::Gpl3)
            .build()
            .unwrap(),
        ProjectSpec::builder("forest")
            .kind(ProjectKind::Ml)
            .license(License::Apache2)
            .build()
            .unwrap(),
        ProjectSpec::builder("deep-net")
            .kind(ProjectKind::Dl)
            .framework(ModelFramework::TensorFlow)
            .build()
            .unwrap(),
    ]
}

#[test]
fn every_bundled_template_renders_strictly() {
    let renderer = MiniJinjaRenderer::new();
    for spec in specs() {
        let ctx = RenderContext::for_project(&spec, 2026);
        for (name, content) in BundledSource::templates() {
            let name = TemplateName::parse(name).unwrap();
            let out = renderer
                .render(&name, content, &ctx)
                .unwrap_or_else(|e| panic!("{name} failed for {}: {e}", spec.name()));
            assert!(!out.contains("{{"), "{name} left a placeholder");
        }
    }
}

#[test]
fn pyproject_lists_dependencies() {
    let spec = ProjectSpec::builder("forest")
        .kind(ProjectKind::Ml)
        .build()
        .unwrap();
    let ctx = RenderContext::for_project(&spec, 2026);
    let (_, content) = BundledSource::templates()
        .iter()
        .find(|(n, _)| *n == "pyproject.toml.j2")
        .unwrap();

    let out = MiniJinjaRenderer::new()
        .render(&TemplateName::parse("pyproject.toml.j2").unwrap(), content, &ctx)
        .unwrap();
    assert!(out.contains("name = \"forest\""));
    assert!(out.contains("\"scikit-learn>=1.3\","));
    assert!(out.contains("forest = \"forest.main:main\""));
}

#[test]
fn user_directory_overrides_bundled() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("README.md.j2"), "# {{ project_name }}!").unwrap();
    let resolver = resolver(tmp.path());

    let readme = resolver.resolve("README.md.j2").unwrap();
    assert_eq!(readme.source().map(|s| s.as_str()), Some(USER));

    let license = resolver.resolve("LICENSE.j2").unwrap();
    assert_eq!(license.source().map(|s| s.as_str()), Some(BUNDLED));

    fs::remove_file(tmp.path().join("README.md.j2")).unwrap();
    let readme = resolver.resolve("README.md.j2").unwrap();
    assert_eq!(readme.source().map(|s| s.as_str()), Some(BUNDLED));
}

#[test]
fn stray_user_file_does_not_block_fallback() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sub"), "stray").unwrap();
    let bundled = MemorySource::with_templates(BUNDLED, [("sub/x.j2", "from below")]).unwrap();
    let resolver = LayeredResolver::new(vec![
        Box::new(DirectorySource::new(USER, tmp.path())),
        Box::new(bundled),
    ])
    .unwrap();

    let found = resolver.resolve("sub/x.j2").unwrap();
    assert_eq!(found.content(), Some("from below"));
    assert_eq!(found.source().map(|s| s.as_str()), Some(BUNDLED));
}

#[test]
fn eject_materializes_into_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let user_dir = tmp.path().join("config/viperx/templates");
    let resolver = resolver(&user_dir);

    let first = resolver.materialize_overrides(USER).unwrap();
    assert_eq!(first, BundledSource::templates().len());
    for (name, content) in BundledSource::templates() {
        assert_eq!(fs::read_to_string(user_dir.join(name)).unwrap(), *content);
    }

    let second = resolver.materialize_overrides(USER).unwrap();
    assert_eq!(first, second);
    assert!(
        resolver
            .list_templates()
            .unwrap()
            .iter()
            .all(|row| row.source == USER)
    );
}

#[test]
fn eject_into_unwritable_path_reports_io() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();
    let resolver = resolver(&blocker.join("templates"));

    let err = resolver.materialize_overrides(USER).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn full_generation_into_memory() {
    let tmp = TempDir::new().unwrap();
    let fs = MemoryFilesystem::new();
    let generator = ProjectGenerator::new(
        resolver(tmp.path()),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(fs.clone()),
    );

    let spec = ProjectSpec::builder("deep-net")
        .kind(ProjectKind::Dl)
        .author("Grace")
        .build()
        .unwrap();
    let report = generator
        .generate(&GenerationRequest::new(spec, "/projects"))
        .unwrap();

    assert_eq!(report.files.len(), fs.list_files().len());
    let loader = fs
        .read_file(Path::new("/projects/deep-net/src/deep_net/data_loader.py"))
        .unwrap();
    assert!(loader.contains("import torch"));
    let license = fs
        .read_file(Path::new("/projects/deep-net/LICENSE"))
        .unwrap();
    assert!(license.contains("Grace"));
}
