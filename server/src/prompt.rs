/// Builds the instruction sent to the model for one complaint.
///
/// The complaint is embedded verbatim; callers pass it already trimmed.
pub fn build_email_prompt(complaint: &str) -> String {
    format!(
        "You are a professional customer service representative. Please generate a polite, \
helpful, and professional email response to the following customer complaint.

The email should:
- Acknowledge the customer's concern
- Show empathy and understanding
- Provide a helpful solution or next steps
- Maintain a professional and friendly tone
- Be concise but thorough
- Include a proper greeting and closing

Customer Complaint:
{complaint}

Please generate only the email response without any additional commentary or formatting markers."
    )
}
