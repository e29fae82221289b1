use super::IdeaCommandService;
use crate::{
    application::{
        dto::IdeaDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        idea::{Feedback, IdeaId},
        user::UserId,
    },
};

pub struct SetIdeaFeedbackCommand {
    pub idea_id: String,
    pub feedback: Option<String>,
}

impl IdeaCommandService {
    pub async fn set_idea_feedback(
        &self,
        user_id: UserId,
        command: SetIdeaFeedbackCommand,
    ) -> ApplicationResult<IdeaDto> {
        let id = IdeaId::parse(&command.idea_id)?;
        let feedback = Feedback::parse(command.feedback.as_deref())?;

        let idea = self
            .idea_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::IdeaNotFound(id.to_string()))?;
        if !idea.is_owned_by(user_id) {
            return Err(ApplicationError::AccessDenied);
        }

        let updated = self.idea_write.set_feedback(id, feedback).await?;
        Ok(updated.into())
    }
}
