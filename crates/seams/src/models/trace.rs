use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::message::Message;

/// An ordered, read-only sequence of messages produced by one agent turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    messages: Vec<Message>,
}

impl Trace {
    pub fn new(messages: Vec<Message>) -> Self {
        Trace { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl Deref for Trace {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.messages
    }
}

impl From<Vec<Message>> for Trace {
    fn from(messages: Vec<Message>) -> Self {
        Trace::new(messages)
    }
}

impl FromIterator<Message> for Trace {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Trace::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
