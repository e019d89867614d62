//! Integration tests for the video and playlist registries and joined views
//!
//! Tests run through `LocalCatalog`, the same entry point the server uses.


use test_helpers::*;
use vidshelf_core::{
    types::{CreatePlaylist, CreateVideo, Direction},
    CatalogStore, ShelfError,
};

#[tokio::test]
async fn test_register_and_get_video() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;

    let name = catalog
        .register_video(
            CreateVideo::new("a.mp4", "/public/a.mp4").with_description("Opening scene"),
        )
        .await
        .expect("Failed to register video");
    assert_eq!(name, "a.mp4");

    let video = catalog.get_video("a.mp4").await.unwrap().unwrap();
    assert_eq!(video.url, "/public/a.mp4");
    assert_eq!(video.description.as_deref(), Some("Opening scene"));
}

#[tokio::test]
async fn test_register_duplicate_video_is_duplicate_key() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;

    catalog
        .register_video(CreateVideo::new("a.mp4", "/public/a.mp4"))
        .await
        .unwrap();

    let err = catalog
        .register_video(CreateVideo::new("a.mp4", "/public/elsewhere/a.mp4"))
        .await
        .unwrap_err();
    assert!(matches!(err, ShelfError::DuplicateKey { .. }), "got {err:?}");

    // First registration is untouched
    let video = catalog.get_video("a.mp4").await.unwrap().unwrap();
    assert_eq!(video.url, "/public/a.mp4");
}

#[tokio::test]
async fn test_update_description_reports_affected_rows() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;

    create_test_video(test_db.pool(), "a.mp4").await;

    let updated = catalog
        .update_video_description("a.mp4", Some("Director's cut".to_string()))
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let video = catalog.get_video("a.mp4").await.unwrap().unwrap();
    assert_eq!(video.description.as_deref(), Some("Director's cut"));

    let updated = catalog
        .update_video_description("missing.mp4", Some("nothing".to_string()))
        .await
        .unwrap();
    assert_eq!(updated, 0);
}

#[tokio::test]
async fn test_register_and_list_playlists() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;

    let first = catalog
        .register_playlist(CreatePlaylist::new("Favorites"))
        .await
        .unwrap();
    let second = catalog
        .register_playlist(CreatePlaylist {
            name: "Later".to_string(),
            description: Some("Watch this weekend".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert!(second > first);

    let playlists = catalog.list_playlists().await.unwrap();
    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].name, "Favorites");
    assert_eq!(playlists[1].description.as_deref(), Some("Watch this weekend"));

    let found = vidshelf_storage::playlists::get_by_id(test_db.pool(), second)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Later");
}

#[tokio::test]
async fn test_remove_video_cascades_to_memberships() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;
    let pool = test_db.pool();

    let favorites = create_test_playlist(pool, "Favorites").await;
    let later = create_test_playlist(pool, "Later").await;
    create_test_video(pool, "a.mp4").await;
    create_test_video(pool, "b.mp4").await;
    append(pool, favorites, "a.mp4").await;
    append(pool, favorites, "b.mp4").await;
    append(pool, later, "a.mp4").await;

    let deleted = catalog.remove_video("a.mp4").await.unwrap();
    assert_eq!(deleted, 1);

    assert_eq!(ordered(pool, favorites).await, vec![("b.mp4".to_string(), 2)]);
    assert!(ordered(pool, later).await.is_empty());
    assert!(catalog.list_playlists_for_video("a.mp4").await.unwrap().is_empty());

    // Nothing left dangling in the ledger
    assert!(vidshelf_storage::memberships::list(pool, later)
        .await
        .unwrap()
        .is_empty());

    assert_eq!(catalog.remove_video("a.mp4").await.unwrap(), 0);
}

#[tokio::test]
async fn test_ordered_videos_sorted_by_position() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;
    let pool = test_db.pool();

    let playlist_id = create_test_playlist(pool, "Queue").await;
    for name in ["a.mp4", "b.mp4", "c.mp4"] {
        create_test_video(pool, name).await;
        append(pool, playlist_id, name).await;
    }
    catalog
        .move_video(playlist_id, "a.mp4", Direction::Bottom)
        .await
        .unwrap();

    let entries = catalog.ordered_videos(playlist_id).await.unwrap();
    let order: Vec<(&str, i64)> = entries
        .iter()
        .map(|e| (e.video.name.as_str(), e.position))
        .collect();
    assert_eq!(order, vec![("b.mp4", 2), ("c.mp4", 3), ("a.mp4", 4)]);
    assert_eq!(entries[0].video.url, "/public/b.mp4");
}

#[tokio::test]
async fn test_ordered_videos_of_empty_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_test_playlist(pool, "Empty").await;

    assert!(ordered(pool, playlist_id).await.is_empty());
    assert!(ordered(pool, 404).await.is_empty());
}

#[tokio::test]
async fn test_favorites_scenario() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;

    catalog
        .register_video(CreateVideo::new("a.mp4", "/public/a.mp4"))
        .await
        .unwrap();
    let favorites = catalog
        .register_playlist(CreatePlaylist::new("Favorites"))
        .await
        .unwrap();
    assert_eq!(favorites, 1);

    let a = catalog.append_video(favorites, "a.mp4").await.unwrap();
    assert_eq!(a.position, 1);

    catalog
        .register_video(CreateVideo::new("b.mp4", "/public/b.mp4"))
        .await
        .unwrap();
    let b = catalog.append_video(favorites, "b.mp4").await.unwrap();
    assert_eq!(b.position, 2);

    let updated = catalog
        .move_video(favorites, "b.mp4", Direction::Top)
        .await
        .unwrap();
    assert_eq!(updated, 1);

    // Both now share position 1; the tie breaks by insertion order
    let entries = catalog.ordered_videos(favorites).await.unwrap();
    let order: Vec<(&str, i64)> = entries
        .iter()
        .map(|e| (e.video.name.as_str(), e.position))
        .collect();
    assert_eq!(order, vec![("a.mp4", 1), ("b.mp4", 1)]);
}

#[tokio::test]
async fn test_videos_with_playlists_includes_videos_without_memberships() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;
    let pool = test_db.pool();

    let favorites = create_test_playlist(pool, "Favorites").await;
    let later = create_test_playlist(pool, "Later").await;
    create_test_video(pool, "b.mp4").await;
    create_test_video(pool, "a.mp4").await;
    create_test_video(pool, "new.mkv").await;
    append(pool, favorites, "a.mp4").await;
    append(pool, later, "a.mp4").await;
    append(pool, favorites, "b.mp4").await;

    let videos = catalog.list_videos(None).await.unwrap();

    let names: Vec<&str> = videos.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["a.mp4", "b.mp4", "new.mkv"]);

    let a_lists: Vec<&str> = videos[0].lists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(a_lists, vec!["Favorites", "Later"]);
    assert_eq!(videos[1].lists.len(), 1);
    assert!(videos[2].lists.is_empty());
}

#[tokio::test]
async fn test_videos_filtered_by_playlist_follow_position() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;
    let pool = test_db.pool();

    let favorites = create_test_playlist(pool, "Favorites").await;
    let later = create_test_playlist(pool, "Later").await;
    for name in ["a.mp4", "b.mp4", "c.mp4", "outsider.mp4"] {
        create_test_video(pool, name).await;
    }
    append(pool, favorites, "a.mp4").await;
    append(pool, favorites, "b.mp4").await;
    append(pool, favorites, "c.mp4").await;
    append(pool, later, "c.mp4").await;
    append(pool, later, "outsider.mp4").await;

    catalog
        .move_video(favorites, "c.mp4", Direction::Top)
        .await
        .unwrap();
    catalog
        .move_video(favorites, "a.mp4", Direction::Bottom)
        .await
        .unwrap();

    let videos = catalog.list_videos(Some(favorites)).await.unwrap();

    let names: Vec<&str> = videos.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["c.mp4", "b.mp4", "a.mp4"]);

    // Only the filtered playlist is reported, even for c.mp4
    for video in &videos {
        assert_eq!(video.lists.len(), 1);
        assert_eq!(video.lists[0].id, favorites);
    }

    assert!(catalog.list_videos(Some(999)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_playlists_of_video() {
    let test_db = TestDb::new().await;
    let catalog = &test_db.catalog;
    let pool = test_db.pool();

    let favorites = create_test_playlist(pool, "Favorites").await;
    let later = create_test_playlist(pool, "Later").await;
    create_test_playlist(pool, "Unrelated").await;
    create_test_video(pool, "a.mp4").await;
    create_test_video(pool, "b.mp4").await;
    append(pool, later, "a.mp4").await;
    append(pool, favorites, "a.mp4").await;

    let playlists = catalog.list_playlists_for_video("a.mp4").await.unwrap();
    let ids: Vec<i64> = playlists.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![later, favorites]);

    assert!(catalog
        .list_playlists_for_video("b.mp4")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_reopening_keeps_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("shelf.db").display());

    let catalog = vidshelf_storage::LocalCatalog::open(&db_url, 2).await.unwrap();
    catalog
        .register_video(CreateVideo::new("a.mp4", "/public/a.mp4"))
        .await
        .unwrap();
    catalog.close().await;

    // Migrations are idempotent on an existing file
    let reopened = vidshelf_storage::LocalCatalog::open(&db_url, 2).await.unwrap();
    assert!(reopened.get_video("a.mp4").await.unwrap().is_some());
    reopened.close().await;
}
