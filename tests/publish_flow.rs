use postpilot_core::application::commands::publish::{
    ARTICLE_ENQUEUE_FAILED_MESSAGE, PublishArticleItem, PublishArticlesCommand,
};
use postpilot_core::application::error::ApplicationError;
use postpilot_core::domain::article::ArticleStatus;
use postpilot_core::domain::idea::IdeaId;
use postpilot_core::domain::job::{JobId, JobStatus};
use postpilot_core::domain::user::UserId;

mod support;

use support::{PlanBuilder, TestWorld};

fn command(ids: &[IdeaId]) -> PublishArticlesCommand {
    PublishArticlesCommand {
        articles: ids
            .iter()
            .map(|id| PublishArticleItem {
                idea_id: id.to_string(),
                feedback: None,
            })
            .collect(),
    }
}

#[tokio::test]
async fn article_cap_is_enforced_before_anything_is_written() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new().max_articles(10), 8);
    let ideas = world.seed_ideas(user, 5, 0);
    let publish = &world.services.publish_commands;

    let err = publish
        .publish_articles(user, command(&ideas[..3]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::QuotaExceeded {
            used: 8,
            requested: 3,
            limit: 10
        }
    ));
    assert_eq!(world.articles.count(), 0);
    assert!(world.jobs.for_user(user).is_empty());
    assert!(world.ideas.for_user(user).iter().all(|idea| !idea.approved));
    assert_eq!(world.users.get(user).articles_used, 8);

    let result = publish
        .publish_articles(user, command(&ideas[..2]))
        .await
        .unwrap();
    assert_eq!(result.articles_count, 2);
    assert_eq!(result.articles_enqueued, 2);
    assert_eq!(result.status, "queued");

    let stored = world.users.get(user);
    assert_eq!(stored.articles_used, 10);
    assert!(stored.has_completed_onboarding);
}

#[tokio::test]
async fn one_failed_enqueue_does_not_stop_the_batch() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new().max_articles(10), 0);
    let ideas = world.seed_ideas(user, 5, 0);
    // attempt 1 is the job notice, attempt 3 is the task of the second idea
    world.queue.fail_on_attempt(3);

    let result = world
        .services
        .publish_commands
        .publish_articles(user, command(&ideas))
        .await
        .unwrap();

    assert_eq!(result.articles_count, 5);
    assert_eq!(result.articles_enqueued, 4);

    let articles = world.articles.for_user(user);
    let statuses: Vec<ArticleStatus> = articles.iter().map(|article| article.status).collect();
    assert_eq!(
        statuses,
        vec![
            ArticleStatus::Generating,
            ArticleStatus::Error,
            ArticleStatus::Generating,
            ArticleStatus::Generating,
            ArticleStatus::Generating,
        ]
    );
    assert_eq!(articles[1].idea_id, Some(ideas[1]));
    assert_eq!(
        articles[1].error_message.as_deref(),
        Some(ARTICLE_ENQUEUE_FAILED_MESSAGE)
    );

    let job = world.jobs.get(JobId::parse(&result.job_id).unwrap());
    assert_eq!(job.status, JobStatus::Queued);
    assert_eq!(world.users.get(user).articles_used, 5);
}

#[tokio::test]
async fn lost_job_notice_is_tolerated() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new(), 0);
    let ideas = world.seed_ideas(user, 2, 0);
    world.queue.fail_on_attempt(1);

    let result = world
        .services
        .publish_commands
        .publish_articles(user, command(&ideas))
        .await
        .unwrap();

    assert_eq!(result.articles_enqueued, 2);
    let messages = world.queue.messages_on(&world.queues.publish);
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|message| message.get("articleId").is_some()));
}

#[tokio::test]
async fn publish_messages_carry_idea_and_feedback() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new(), 0);
    let ideas = world.seed_ideas(user, 1, 0);

    let result = world
        .services
        .publish_commands
        .publish_articles(
            user,
            PublishArticlesCommand {
                articles: vec![PublishArticleItem {
                    idea_id: ideas[0].to_string(),
                    feedback: Some("  Mention the weekend classes  ".into()),
                }],
            },
        )
        .await
        .unwrap();

    let messages = world.queue.messages_on("article-publish-queue");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["type"], "publish_articles");
    assert_eq!(messages[0]["jobId"], result.job_id);
    assert_eq!(messages[0]["articlesCount"], 1);

    let article = &world.articles.for_user(user)[0];
    assert_eq!(messages[1]["articleId"], article.id.to_string());
    assert_eq!(messages[1]["ideaId"], ideas[0].to_string());
    assert_eq!(messages[1]["userId"], user.to_string());
    assert_eq!(messages[1]["title"], "Idea number 1");
    assert_eq!(messages[1]["feedback"], "Mention the weekend classes");
}

#[tokio::test]
async fn selected_ideas_are_approved_and_the_rest_discarded() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new(), 0);
    let ideas = world.seed_ideas(user, 5, 0);

    world
        .services
        .publish_commands
        .publish_articles(user, command(&ideas[1..3]))
        .await
        .unwrap();

    let left = world.ideas.for_user(user);
    assert_eq!(left.len(), 2);
    assert!(left.iter().all(|idea| idea.approved));
    assert!(left.iter().all(|idea| ideas[1..3].contains(&idea.id)));
}

#[tokio::test]
async fn foreign_or_unknown_ideas_abort_the_batch() {
    let world = TestWorld::new();
    let owner = world.seed_user(PlanBuilder::new(), 0);
    let intruder = world.seed_user(PlanBuilder::new(), 0);
    let owned = world.seed_ideas(owner, 2, 0);
    let mine = world.seed_ideas(intruder, 1, 0);

    let err = world
        .services
        .publish_commands
        .publish_articles(intruder, command(&[mine[0], owned[0]]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::AccessDenied));

    let missing = IdeaId::generate();
    let err = world
        .services
        .publish_commands
        .publish_articles(intruder, command(&[missing]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::IdeaNotFound(id) if id == missing.to_string()));

    assert_eq!(world.articles.count(), 0);
    assert!(world.jobs.all().is_empty());
    assert_eq!(world.ideas.for_user(owner).len(), 2);
}

#[tokio::test]
async fn malformed_batches_are_validation_errors() {
    let world = TestWorld::new();
    let user = world.seed_user(PlanBuilder::new(), 0);
    let ideas = world.seed_ideas(user, 1, 0);
    let publish = &world.services.publish_commands;

    let err = publish
        .publish_articles(user, PublishArticlesCommand { articles: vec![] })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = publish
        .publish_articles(user, command(&[ideas[0], ideas[0]]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = publish
        .publish_articles(
            user,
            PublishArticlesCommand {
                articles: vec![PublishArticleItem {
                    idea_id: ideas[0].to_string(),
                    feedback: Some("x".repeat(1001)),
                }],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert_eq!(world.articles.count(), 0);
}

#[tokio::test]
async fn unknown_user_cannot_publish() {
    let world = TestWorld::new();
    let err = world
        .services
        .publish_commands
        .publish_articles(UserId::generate(), command(&[IdeaId::generate()]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UserNotFound));
}
