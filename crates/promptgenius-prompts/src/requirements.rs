use crate::context::PromptContext;

/// Append the bulleted requirements list.
pub fn append_requirements(prompt: &mut String, ctx: &PromptContext) {
    prompt.push_str("Requirements:\n");
    prompt.push_str(&format!("- Maintain a {} approach\n", ctx.tone_label()));
    prompt.push_str(&format!(
        "- Focus on {}\n",
        ctx.output_type.description().to_lowercase()
    ));
    prompt.push_str(
        "- Provide specific, actionable guidance\n\
         - Include relevant examples where appropriate\n",
    );
    prompt.push_str(&format!(
        "- Ensure the output is tailored for {}\n\n",
        ctx.audience_label()
    ));
}

/// Append the closing request. The prompt ends without a trailing newline.
pub fn append_closing(prompt: &mut String) {
    prompt.push_str(
        "Please provide a comprehensive response that addresses all aspects of this request \
         while maintaining clarity and relevance to the target audience.",
    );
}
