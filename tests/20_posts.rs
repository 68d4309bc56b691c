mod common;

use anyhow::Result;

use blog_api::application::posts::{
    DeletePostCommand, GetAllPostsQuery, GetPostByIdQuery, UpdatePostCommand,
};
use blog_api::application::users::DeleteUserCommand;
use blog_api::domain::error::DomainError;

#[tokio::test]
async fn create_attaches_author_snapshot() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;

    let post = common::create_post(&ctx, alice.id, "First", "hello world").await?;
    assert!(post.id > 0);
    assert_eq!(post.author_id, alice.id);
    let author = post.author.expect("author snapshot");
    assert_eq!(author.username, "alice");
    assert_eq!(author.email, "alice@example.com");
    Ok(())
}

#[tokio::test]
async fn listing_is_newest_first() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;

    common::create_post(&ctx, alice.id, "one", "a").await?;
    common::create_post(&ctx, alice.id, "two", "b").await?;
    common::create_post(&ctx, alice.id, "three", "c").await?;

    let posts = ctx
        .queries
        .dispatch(GetAllPostsQuery { search_term: None })
        .await?;
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
    Ok(())
}

#[tokio::test]
async fn search_matches_title_and_content_case_insensitively() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;

    common::create_post(&ctx, alice.id, "Rust ownership", "moves and borrows").await?;
    common::create_post(&ctx, alice.id, "Gardening", "how to grow RUST-colored roses").await?;
    common::create_post(&ctx, alice.id, "Cooking", "pasta for beginners").await?;

    let hits = ctx
        .queries
        .dispatch(GetAllPostsQuery {
            search_term: Some("rust".into()),
        })
        .await?;
    assert_eq!(hits.len(), 2);
    // Newest first within the result set.
    assert_eq!(hits[0].title, "Gardening");
    assert_eq!(hits[1].title, "Rust ownership");
    Ok(())
}

#[tokio::test]
async fn update_by_non_owner_is_forbidden_and_changes_nothing() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let mallory = common::register_user(&ctx, "mallory").await?;
    let post = common::create_post(&ctx, alice.id, "Original", "body").await?;

    let attempt = || UpdatePostCommand {
        id: post.id,
        author_id: mallory.id,
        title: Some("Hijacked".into()),
        content: None,
    };
    let err = ctx.commands.dispatch(attempt()).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::forbidden("you can only update your own posts")
    );

    // Retrying yields the same outcome.
    let err = ctx.commands.dispatch(attempt()).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::forbidden("you can only update your own posts")
    );

    let unchanged = ctx
        .queries
        .dispatch(GetPostByIdQuery { id: post.id })
        .await?;
    assert_eq!(unchanged.title, "Original");
    assert_eq!(unchanged.updated_at, post.updated_at);
    Ok(())
}

#[tokio::test]
async fn owner_update_merges_fields_and_advances_updated_at() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let post = common::create_post(&ctx, alice.id, "Original", "body").await?;

    let updated = ctx
        .commands
        .dispatch(UpdatePostCommand {
            id: post.id,
            author_id: alice.id,
            title: Some("Renamed".into()),
            content: None,
        })
        .await?;
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "body");
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at >= post.updated_at);
    Ok(())
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let mallory = common::register_user(&ctx, "mallory").await?;
    let post = common::create_post(&ctx, alice.id, "Keep me", "body").await?;

    let err = ctx
        .commands
        .dispatch(DeletePostCommand {
            id: post.id,
            author_id: mallory.id,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::forbidden("you can only delete your own posts")
    );

    // Still there.
    let found = ctx
        .queries
        .dispatch(GetPostByIdQuery { id: post.id })
        .await?;
    assert_eq!(found.id, post.id);
    Ok(())
}

#[tokio::test]
async fn missing_post_is_not_found() -> Result<()> {
    let ctx = common::test_context();

    let err = ctx
        .queries
        .dispatch(GetPostByIdQuery { id: 777 })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::not_found("post 777 not found"));
    Ok(())
}

#[tokio::test]
async fn find_by_author_returns_only_their_posts_newest_first() -> Result<()> {
    use blog_api::database::memory::MemoryDb;
    use blog_api::domain::post::Post;
    use blog_api::domain::repository::{PostRepository, UserRepository};
    use blog_api::domain::user::User;

    let db = MemoryDb::new();
    let alice = UserRepository::create(
        &db,
        User::create("alice".into(), "alice@example.com".into(), "h".into(), None),
    )
    .await?;
    let bob = UserRepository::create(
        &db,
        User::create("bob".into(), "bob@example.com".into(), "h".into(), None),
    )
    .await?;

    PostRepository::create(&db, Post::create("a1".into(), "x".into(), alice.id)).await?;
    PostRepository::create(&db, Post::create("b1".into(), "x".into(), bob.id)).await?;
    PostRepository::create(&db, Post::create("a2".into(), "x".into(), alice.id)).await?;

    let posts = PostRepository::find_by_author(&db, alice.id).await?;
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["a2", "a1"]);
    Ok(())
}

#[tokio::test]
async fn listing_excludes_posts_with_deleted_author() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let bob = common::register_user(&ctx, "bob").await?;
    let orphaned = common::create_post(&ctx, alice.id, "Orphaned", "body").await?;
    common::create_post(&ctx, bob.id, "Survives", "body").await?;

    ctx.commands
        .dispatch(DeleteUserCommand { id: alice.id })
        .await?;

    // List view drops the row whose author is gone.
    let posts = ctx
        .queries
        .dispatch(GetAllPostsQuery { search_term: None })
        .await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Survives");

    // Direct fetch keeps the post, with no author snapshot.
    let fetched = ctx
        .queries
        .dispatch(GetPostByIdQuery { id: orphaned.id })
        .await?;
    assert_eq!(fetched.title, "Orphaned");
    assert!(fetched.author.is_none());
    Ok(())
}
