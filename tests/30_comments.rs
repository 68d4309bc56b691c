mod common;

use anyhow::Result;

use blog_api::application::comments::{CreateCommentCommand, GetCommentsByPostQuery};
use blog_api::application::posts::DeletePostCommand;
use blog_api::application::users::DeleteUserCommand;
use blog_api::domain::error::DomainError;

#[tokio::test]
async fn comments_come_back_oldest_first() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let post = common::create_post(&ctx, alice.id, "Thread", "body").await?;

    for text in ["first", "second", "third"] {
        ctx.commands
            .dispatch(CreateCommentCommand {
                content: text.to_string(),
                post_id: post.id,
                author_id: alice.id,
            })
            .await?;
    }

    let comments = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: post.id })
        .await?;
    let bodies: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
    for comment in &comments {
        assert_eq!(comment.created_at, comment.updated_at);
        assert_eq!(comment.author.as_ref().unwrap().username, "alice");
    }
    Ok(())
}

#[tokio::test]
async fn commenting_on_missing_post_fails_and_persists_nothing() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let post = common::create_post(&ctx, alice.id, "Real", "body").await?;

    let err = ctx
        .commands
        .dispatch(CreateCommentCommand {
            content: "into the void".into(),
            post_id: 9999,
            author_id: alice.id,
        })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::not_found("post 9999 not found"));

    // The real post's thread is untouched.
    let comments = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: post.id })
        .await?;
    assert!(comments.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_thread_is_an_empty_list_not_an_error() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let post = common::create_post(&ctx, alice.id, "Quiet", "body").await?;

    let comments = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: post.id })
        .await?;
    assert!(comments.is_empty());

    // Same for a post id that never existed; the query does not probe posts.
    let comments = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: 4242 })
        .await?;
    assert!(comments.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_a_post_cascades_to_its_comments() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let doomed = common::create_post(&ctx, alice.id, "Doomed", "body").await?;
    let kept = common::create_post(&ctx, alice.id, "Kept", "body").await?;

    ctx.commands
        .dispatch(CreateCommentCommand {
            content: "goes away".into(),
            post_id: doomed.id,
            author_id: alice.id,
        })
        .await?;
    ctx.commands
        .dispatch(CreateCommentCommand {
            content: "stays".into(),
            post_id: kept.id,
            author_id: alice.id,
        })
        .await?;

    ctx.commands
        .dispatch(DeletePostCommand {
            id: doomed.id,
            author_id: alice.id,
        })
        .await?;

    let gone = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: doomed.id })
        .await?;
    assert!(gone.is_empty());

    let remaining = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: kept.id })
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].content, "stays");
    Ok(())
}

#[tokio::test]
async fn comments_by_author_come_back_newest_first_and_delete_individually() -> Result<()> {
    use blog_api::database::memory::MemoryDb;
    use blog_api::domain::comment::Comment;
    use blog_api::domain::post::Post;
    use blog_api::domain::repository::{CommentRepository, PostRepository, UserRepository};
    use blog_api::domain::user::User;

    let db = MemoryDb::new();
    let alice = UserRepository::create(
        &db,
        User::create("alice".into(), "alice@example.com".into(), "h".into(), None),
    )
    .await?;
    let post = PostRepository::create(&db, Post::create("T".into(), "x".into(), alice.id)).await?;

    let first =
        CommentRepository::create(&db, Comment::create("first".into(), post.id, alice.id)).await?;
    let second =
        CommentRepository::create(&db, Comment::create("second".into(), post.id, alice.id)).await?;

    let mine = CommentRepository::find_by_author(&db, alice.id).await?;
    let bodies: Vec<&str> = mine.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(bodies, vec!["second", "first"]);

    assert!(CommentRepository::delete(&db, first.id).await?);
    assert!(!CommentRepository::delete(&db, first.id).await?);
    assert!(CommentRepository::find_by_id(&db, first.id).await?.is_none());
    assert_eq!(
        CommentRepository::find_by_id(&db, second.id)
            .await?
            .unwrap()
            .content,
        "second"
    );
    Ok(())
}

#[tokio::test]
async fn thread_excludes_comments_with_deleted_author() -> Result<()> {
    let ctx = common::test_context();
    let alice = common::register_user(&ctx, "alice").await?;
    let bob = common::register_user(&ctx, "bob").await?;
    let post = common::create_post(&ctx, alice.id, "Thread", "body").await?;

    ctx.commands
        .dispatch(CreateCommentCommand {
            content: "from bob".into(),
            post_id: post.id,
            author_id: bob.id,
        })
        .await?;
    ctx.commands
        .dispatch(CreateCommentCommand {
            content: "from alice".into(),
            post_id: post.id,
            author_id: alice.id,
        })
        .await?;

    ctx.commands
        .dispatch(DeleteUserCommand { id: bob.id })
        .await?;

    let comments = ctx
        .queries
        .dispatch(GetCommentsByPostQuery { post_id: post.id })
        .await?;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "from alice");
    Ok(())
}
