//! Prompt templates offered to clients

use serde::Serialize;

/// Name clients use to request the markdown formatting prompt
pub const FORMAT_PROMPT_NAME: &str = "format";

pub const FORMAT_PROMPT_DESCRIPTION: &str =
    "Rewrites the contents of the document in markdown format";

/// Who a prompt message is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// One message of a rendered prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub text: String,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Instruction asking an agent to rewrite `doc_id` as markdown via `edit_document`.
///
/// The id is interpolated verbatim and not checked against the store.
pub fn format_prompt(doc_id: &str) -> String {
    format!(
        r#"
Your goal is to reformat a document to be written with markdown syntax.

The id of the document you need to reformat is:
<document_id>
{doc_id}
</document_id>

Add in headers, bullet points, tables, etc as necessary. Feel free to add in structure.
Use the 'edit_document' tool to edit the document. After the document has been reformatted...
"#
    )
}

/// [`format_prompt`] wrapped as the message list returned to clients
pub fn format_messages(doc_id: &str) -> Vec<PromptMessage> {
    vec![PromptMessage::user(format_prompt(doc_id))]
}
