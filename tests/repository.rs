use cold_storage_toolbox::project::RawProject;
use cold_storage_toolbox::repository::{MemoryRepository, ProjectRepository, TomlFileRepository};
use cold_storage_toolbox::Diagnostic;

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("cold_storage_repo_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    dir.join(name)
}

#[test]
fn missing_file_loads_defaults() {
    let repo = TomlFileRepository::new(temp_path("does_not_exist.toml"));
    assert_eq!(repo.load().expect("load"), RawProject::default());
}

#[test]
fn file_repository_keeps_raw_text() {
    let path = temp_path("project.toml");
    let repo = TomlFileRepository::new(&path);
    let mut project = RawProject::default();
    project.room.length = "6.5".into();
    project.product.product_type = "Cheese".into();
    repo.save(&project).expect("save");
    let loaded = repo.load().expect("load");
    assert_eq!(loaded, project);

    let b = loaded.to_inputs().evaluate(&Default::default());
    assert!(b.has(Diagnostic::UnknownProductType));
    std::fs::remove_file(path).ok();
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let path = temp_path("partial.toml");
    std::fs::write(&path, "[room]\nlength = \"10\"\n").expect("write");
    let loaded = TomlFileRepository::new(&path).load().expect("load");
    assert_eq!(loaded.room.length, "10");
    assert_eq!(loaded.room.width, RawProject::default().room.width);
    assert_eq!(loaded.product, RawProject::default().product);
    std::fs::remove_file(path).ok();
}

#[test]
fn memory_repository_round_trip() {
    let repo = MemoryRepository::default();
    assert_eq!(repo.load().unwrap(), RawProject::default());
    let mut project = RawProject::default();
    project.conditions.internal_temp = "-25".into();
    repo.save(&project).unwrap();
    assert_eq!(repo.load().unwrap().conditions.internal_temp, "-25");
}

#[test]
fn memory_repository_starts_from_given_project() {
    let mut project = RawProject::default();
    project.product.product_type = "durian".into();
    let repo = MemoryRepository::with_project(project.clone());
    let loaded = repo.load().unwrap();
    assert_eq!(loaded, project);
    assert!(loaded.to_inputs().evaluate(&Default::default()).has(Diagnostic::UnknownProductType));
}
