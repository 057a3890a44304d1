use ar_core::{is_blank, ChatMessage, Error, Result};

/// Identifies a question waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    pub session_id: u64,
    pub question: String,
}

/// Append-only transcript about one article. A new session starts every
/// time the current analysis changes.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: u64,
    article_title: String,
    messages: Vec<ChatMessage>,
    is_replying: bool,
}

impl ChatSession {
    pub fn open(id: u64, article_title: impl Into<String>, greeting: ChatMessage) -> Self {
        Self {
            id,
            article_title: article_title.into(),
            messages: vec![greeting],
            is_replying: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_replying(&self) -> bool {
        self.is_replying
    }

    /// Record the user's question and wait for a reply.
    pub fn push_question(&mut self, question: &str) -> Result<ChatTicket> {
        if is_blank(question) {
            return Err(Error::EmptyInput);
        }
        if self.is_replying {
            return Err(Error::ChatPending);
        }

        let question = question.trim().to_string();
        self.messages.push(ChatMessage::user(question.clone()));
        self.is_replying = true;
        Ok(ChatTicket {
            session_id: self.id,
            question,
        })
    }

    pub fn push_reply(&mut self, reply: ChatMessage) {
        self.messages.push(reply);
        self.is_replying = false;
    }

    pub fn abandon_reply(&mut self) {
        self.is_replying = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::Sender;

    fn session() -> ChatSession {
        ChatSession::open(1, "Title", ChatMessage::assistant("hello"))
    }

    #[test]
    fn test_question_flow() {
        let mut chat = session();
        let ticket = chat.push_question("  why?  ").unwrap();
        assert_eq!(ticket.question, "why?");
        assert_eq!(ticket.session_id, 1);
        assert!(chat.is_replying());

        assert!(matches!(chat.push_question("again"), Err(Error::ChatPending)));

        chat.push_reply(ChatMessage::assistant("because"));
        assert!(!chat.is_replying());

        let senders: Vec<Sender> = chat.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut chat = session();
        assert!(matches!(chat.push_question("   "), Err(Error::EmptyInput)));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_replying());
    }

    #[test]
    fn test_abandon_reply_unblocks() {
        let mut chat = session();
        chat.push_question("q").unwrap();
        chat.abandon_reply();
        assert!(chat.push_question("q2").is_ok());
    }
}
