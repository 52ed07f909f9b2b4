use scaffold::config::ProjectType;
use scaffold::layout::{
    container_template, directory_structure, makefile_template, release_workflow,
};
use std::collections::HashSet;

#[test]
fn test_directory_structure_is_non_empty_and_unique() {
    for project_type in ProjectType::ALL {
        let dirs = directory_structure(project_type);
        assert!(!dirs.is_empty());

        let unique: HashSet<_> = dirs.iter().collect();
        assert_eq!(unique.len(), dirs.len(), "duplicates for {project_type}");
    }
}

#[test]
fn test_directory_structure_is_deterministic() {
    for project_type in ProjectType::ALL {
        assert_eq!(directory_structure(project_type), directory_structure(project_type));
    }
}

#[test]
fn test_directory_tables() {
    assert_eq!(
        directory_structure(ProjectType::Cli),
        ["cmd", "internal", "pkg", "api", "configs", "scripts", "build", "test", "docs", "examples"]
    );
    assert_eq!(
        directory_structure(ProjectType::Library),
        ["internal", "pkg", "cmd", "scripts", "test", "docs", "examples"]
    );

    let service = directory_structure(ProjectType::Service);
    assert_eq!(service.len(), 11);
    assert!(service.contains(&"web"));
}

#[test]
fn test_default_type_uses_cli_tables() {
    let default = ProjectType::default();
    assert_eq!(directory_structure(default), directory_structure(ProjectType::Cli));
    assert_eq!(makefile_template(default), "Makefile-cli.j2");
    assert_eq!(release_workflow(default), "workflows/release-cli.yml");
}

#[test]
fn test_artifact_variants_are_distinct() {
    let makefiles: HashSet<_> = ProjectType::ALL.iter().map(|t| makefile_template(*t)).collect();
    let releases: HashSet<_> = ProjectType::ALL.iter().map(|t| release_workflow(*t)).collect();
    assert_eq!(makefiles.len(), 3);
    assert_eq!(releases.len(), 3);
}

#[test]
fn test_only_services_get_a_container() {
    assert_eq!(container_template(ProjectType::Service), Some("Dockerfile.j2"));
    assert_eq!(container_template(ProjectType::Cli), None);
    assert_eq!(container_template(ProjectType::Library), None);
}
