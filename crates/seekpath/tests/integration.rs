use seekpath::{
    Locations, LocationsBuilder, Resolver, find_first, join_paths, multi_path_append,
    resolve_all, resolve_first,
};
use seekpath_platform::{MapEnv, System};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    top:       TempDir,
    locations: Vec<PathBuf>,
}

impl Fixture {
    fn new() -> Self {
        let top = tempfile::Builder::new()
            .prefix("seekpath-test-")
            .tempdir()
            .unwrap();

        let locations: Vec<PathBuf> = [
            "test1", "test1/foo", "test2", "test3", "test4", "test5", "test6",
        ]
        .iter()
        .map(|d| top.path().join(d))
        .collect();
        for dir in &locations {
            fs::create_dir_all(dir).unwrap();
        }
        fs::create_dir_all(top.path().join("test1/sub")).unwrap();
        fs::create_dir_all(top.path().join("test5/sub")).unwrap();

        for file in [
            "test1/foo/e1e2",
            "test3/e1e2",
            "test4/e1e2",
            "test1/sub/d1d2",
            "test5/sub/d1d2",
            "test6/d1d2",
        ] {
            fs::write(top.path().join(file), "test text\n").unwrap();
        }

        Self { top, locations }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.top.path().join(rel)
    }

    fn string_locations(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }
}

#[test]
fn test_resolve_first_from_locations() {
    let fx = Fixture::new();

    let missing = resolve_first("Bla", &fx.locations);
    assert_eq!(missing.file_name(), None);

    let dir = resolve_first("foo", &fx.locations);
    assert!(dir.file_name().is_some());
    assert!(dir.is_dir());
    assert_eq!(dir, fx.path("test1/foo"));

    fs::write(fx.path("test2/bar"), "test text\n").unwrap();
    let file = resolve_first("bar", &fx.locations);
    assert!(file.is_file());
    assert_eq!(file, fx.path("test2/bar"));
}

#[test]
fn test_resolve_first_from_string_locations() {
    let fx = Fixture::new();
    let locations: Locations = fx.string_locations().into_iter().collect();

    assert_eq!(resolve_first("Bla", &locations).file_name(), None);
    assert_eq!(resolve_first("foo", &locations), fx.path("test1/foo"));

    fs::write(fx.path("test2/bar"), "test text\n").unwrap();
    let file = resolve_first("bar", &locations);
    assert!(file.is_file());
}

#[test]
fn test_resolve_all_from_locations() {
    let fx = Fixture::new();

    let found = resolve_all("e1e2", &fx.locations);
    assert_eq!(
        found,
        vec![
            fx.path("test1/foo/e1e2"),
            fx.path("test3/e1e2"),
            fx.path("test4/e1e2"),
        ]
    );

    let nested = resolve_all("sub/d1d2", &fx.locations);
    assert_eq!(
        nested,
        vec![fx.path("test1/sub/d1d2"), fx.path("test5/sub/d1d2")]
    );
}

#[test]
fn test_first_is_head_of_all() {
    let fx = Fixture::new();
    for name in ["e1e2", "sub/d1d2", "d1d2", "foo", "Bla"] {
        let all = resolve_all(name, &fx.locations);
        assert_eq!(find_first(name, &fx.locations), all.first().cloned());
        assert_eq!(
            resolve_first(name, &fx.locations),
            all.first().cloned().unwrap_or_default()
        );
    }
}

#[test]
fn test_all_is_subsequence_of_locations() {
    let fx = Fixture::new();
    let found = resolve_all("d1d2", &fx.locations);
    assert_eq!(found, vec![fx.path("test6/d1d2")]);

    let mut cursor = fx.locations.iter();
    for hit in resolve_all("e1e2", &fx.locations) {
        let parent = hit.parent().unwrap();
        assert!(cursor.any(|l| l == parent));
    }
}

#[test]
fn test_results_reflect_live_filesystem() {
    let fx = Fixture::new();
    let resolver = Resolver::system();

    assert_eq!(resolver.resolve_first("late", &fx.locations).file_name(), None);
    fs::write(fx.path("test5/late"), "").unwrap();
    assert_eq!(resolver.resolve_first("late", &fx.locations), fx.path("test5/late"));
    fs::remove_file(fx.path("test5/late")).unwrap();
    assert_eq!(resolver.resolve_first("late", &fx.locations).file_name(), None);
}

#[test]
fn test_env_derived_locations_resolve_in_order() {
    let fx = Fixture::new();
    let env = MapEnv::new().with("FIXTURE_PATH", join_paths(fx.string_locations()));

    let locations = LocationsBuilder::new()
        .from_env("FIXTURE_PATH")
        .fallback(fx.path("does-not-exist"))
        .exist_only(true)
        .build(&env, &System);

    assert_eq!(locations.as_ref(), fx.locations.as_slice());
    assert_eq!(
        resolve_all("e1e2", &locations),
        resolve_all("e1e2", &fx.locations)
    );
}

#[test]
fn test_expanded_bases_resolve() {
    let fx = Fixture::new();
    let bases = [fx.path("test1"), fx.path("test5")];
    let candidates = multi_path_append(&bases, &["sub", "foo"]);
    assert_eq!(
        candidates,
        vec![
            fx.path("test1/sub"),
            fx.path("test1/foo"),
            fx.path("test5/sub"),
            fx.path("test5/foo"),
        ]
    );
    assert_eq!(
        resolve_all(Path::new("d1d2"), &candidates),
        vec![fx.path("test1/sub/d1d2"), fx.path("test5/sub/d1d2")]
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_location_counts_as_missing() {
    use std::os::unix::fs::PermissionsExt;

    let fx = Fixture::new();
    let locked = fx.path("test2");
    fs::write(locked.join("e1e2"), "").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users bypass permission bits; only assert when the lock holds.
    let locked_out = fs::metadata(locked.join("e1e2")).is_err();
    let found = resolve_all("e1e2", &fx.locations);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if locked_out {
        assert_eq!(found.len(), 3);
        assert!(!found.contains(&locked.join("e1e2")));
    } else {
        assert_eq!(found.len(), 4);
    }
}
