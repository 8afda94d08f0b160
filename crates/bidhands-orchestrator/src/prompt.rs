//! The bid proposal prompt.
//!
//! A fixed template with one slot for the job description. Wording changes
//! here change the product; treat edits as behavior changes, not copy
//! edits.

/// Build the generation prompt for a job description.
pub fn build_prompt(description: &str) -> String {
    format!(
        r#"
You are a bid proposal generator for a freelance platform. Your goal is to create a **concise (approximately 4-8 lines total)** and highly effective bid proposal that immediately grabs the client's attention by demonstrating understanding of their specific need and proposing a clear, valuable solution.

**Input:**

```markdown
**Job Description:**
---
{description}
---
```

**Required Output Structure and Content Focus:**

1.  **Immediate Connection & Understanding (1-2 sentences):**
    * Start by directly referencing the client's project or core problem (e.g., "Regarding your need for...", "I read your post about...").
    * Briefly state your understanding of their main goal or pain point based on the description. Show you've read carefully.

2.  **Brief Value Proposition / Approach (1-2 sentences):**
    * Explain, in simple terms, *how* you will solve their specific problem or achieve their goal.
    * Highlight the *benefit* or *outcome* for the client (e.g., "This will result in...", "Ensuring X and Y...").

3.  **Relevant Expertise Snippet (1 sentence):**
    * Naturally integrate 1-3 of your *most relevant skills* directly related to the solution you just proposed or the technologies mentioned in the job description. Avoid a generic list. Frame it as *how* your skills apply.

4.  **Call to Action & Professional Closing (1-2 sentences):**
    * Express enthusiasm or confidence in your ability to deliver.
    * Invite further discussion (e.g., "I'd love to discuss this further...", "Let's connect to chat about how I can help...").
    * End with a professional closing like "Best regards," or "Sincerely," followed by a comma.

**Strict Generation Rules:**

* Combine the four parts above into a **single block of text** in the specified order.
* The **total output** must be approximately **4-8 lines**. Be concise in each section.
* Tailor the language **specifically** to the provided Job Description. Avoid generic phrases where possible.
* Focus on demonstrating **value** and a clear path to **solving the client's problem**.
* Maintain a professional, confident, and approachable tone.
* **Do NOT** include section titles in the final output.
* **Do NOT** include any placeholders like "[Your Name]".
* **Do NOT** add any text or characters **after** the chosen professional closing comma (e.g., after "Best regards,").

**Generate the Attention-Grabbing Bid Proposal:**
"#
    )
}
