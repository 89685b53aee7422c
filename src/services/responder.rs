use lazy_static::lazy_static;
use regex::Regex;

/// Policy kinds the rule table can ask the extractor about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Return,
    Shipping,
}

impl PolicyKind {
    fn keyword(&self) -> &'static str {
        match self {
            PolicyKind::Return => "return",
            PolicyKind::Shipping => "shipping",
        }
    }

    fn sentence(&self) -> &'static str {
        match self {
            PolicyKind::Return => {
                "We offer a 30-day return policy on all items. \
                 Please keep your receipt and the original packaging."
            }
            PolicyKind::Shipping => {
                "We ship orders within 1-2 business days. \
                 Standard delivery takes 3-5 business days."
            }
        }
    }
}

enum Reply {
    Policy(PolicyKind),
    Canned(&'static str),
}

struct Rule {
    pattern: Regex,
    reply: Reply,
}

impl Rule {
    fn new(pattern: &str, reply: Reply) -> Self {
        Self {
            // patterns are static, a bad one is a programming error
            pattern: Regex::new(pattern).expect("invalid rule pattern"),
            reply,
        }
    }
}

lazy_static! {
    // Declaration order is the tie-break: the first matching rule wins.
    static ref RULES: Vec<Rule> = vec![
        Rule::new(r"\b(return|refund|exchange)\b", Reply::Policy(PolicyKind::Return)),
        Rule::new(r"\b(shipping|delivery|arrival)\b", Reply::Policy(PolicyKind::Shipping)),
        Rule::new(
            r"\b(price|cost)\b",
            Reply::Canned(
                "Pricing depends on the product. \
                 Could you tell me which item you are interested in?"
            ),
        ),
        Rule::new(
            r"\b(contact|support)\b",
            Reply::Canned(
                "You can reach our support team right here in this chat, \
                 and we will get back to you as soon as possible."
            ),
        ),
        Rule::new(r"\b(hello|hi|hey)\b", Reply::Canned("Hello! How can I help you today?")),
        Rule::new(
            r"\b(thanks|thank)\b",
            Reply::Canned("You're welcome! Is there anything else I can help you with?"),
        ),
        Rule::new(
            r"\b(bye|goodbye|farewell)\b",
            Reply::Canned("Goodbye! Feel free to come back if you have more questions."),
        ),
    ];
}

const CONTEXT_EXCERPT_LEN: usize = 200;

/// Maps a user message plus the business context to a reply. Pure and
/// deterministic; never fails and never returns an empty string.
pub fn respond(message: &str, business_context: &str) -> String {
    let message = message.to_lowercase();

    for rule in RULES.iter() {
        if rule.pattern.is_match(&message) {
            return match &rule.reply {
                Reply::Policy(kind) => extract_policy(business_context, *kind),
                Reply::Canned(text) => (*text).to_string(),
            };
        }
    }

    default_reply(business_context)
}

/// Returns the canned policy sentence for `kind` when its keyword occurs
/// anywhere in the context, otherwise a generic contact-support line.
/// TODO: extract the actual policy clause from the context instead of
/// answering with a canned sentence (pending product decision).
pub fn extract_policy(context: &str, kind: PolicyKind) -> String {
    if context.to_lowercase().contains(kind.keyword()) {
        kind.sentence().to_string()
    } else {
        format!(
            "Please contact our support team for details about our {} policy.",
            kind.keyword()
        )
    }
}

fn default_reply(business_context: &str) -> String {
    let excerpt: String = business_context.chars().take(CONTEXT_EXCERPT_LEN).collect();
    format!(
        "Here is what I know about this business: {}... \
         You can ask me about returns, shipping, or how to contact support.",
        excerpt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_matches_regardless_of_context() {
        assert_eq!(
            respond("Hello", "whatever context"),
            "Hello! How can I help you today?"
        );
        assert_eq!(
            respond("Hello", ""),
            "Hello! How can I help you today?"
        );
    }

    #[test]
    fn test_return_question_with_matching_context() {
        let reply = respond(
            "What is your return policy?",
            "We accept returns and shipping is fast",
        );
        assert_eq!(reply, PolicyKind::Return.sentence());
    }

    #[test]
    fn test_return_question_without_matching_context() {
        let reply = respond("Can I get a refund?", "We sell hats");
        assert_eq!(
            reply,
            "Please contact our support team for details about our return policy."
        );
    }

    #[test]
    fn test_shipping_question_with_matching_context() {
        let reply = respond("when is the delivery?", "Shipping takes two days");
        assert_eq!(reply, PolicyKind::Shipping.sentence());
    }

    #[test]
    fn test_unmatched_message_falls_back_to_context_excerpt() {
        let reply = respond("asdkjasd", "random context string");
        assert!(reply.contains("random context string"));
        assert!(reply.contains("returns, shipping"));
    }

    #[test]
    fn test_fallback_truncates_context_to_200_chars() {
        let context = "x".repeat(500);
        let reply = respond("asdkjasd", &context);
        assert!(reply.contains(&"x".repeat(200)));
        assert!(!reply.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_word_boundary_no_match_inside_words() {
        // "hi" inside "this" must not trigger the greeting rule
        let reply = respond("this product", "ctx");
        assert!(reply.contains("Here is what I know"));
    }

    #[test]
    fn test_rule_order_is_the_tie_break() {
        // greeting is declared before thanks, so a message with both
        // tokens takes the greeting branch
        assert_eq!(
            respond("hello and thanks", "ctx"),
            "Hello! How can I help you today?"
        );
        // return is declared before shipping
        assert_eq!(
            respond("refund and delivery?", "returns ok, shipping ok"),
            PolicyKind::Return.sentence()
        );
    }

    #[test]
    fn test_never_empty_and_deterministic() {
        for (msg, ctx) in [
            ("", ""),
            ("hello", ""),
            ("", "some context"),
            ("völlig unrelated ünïcode", "ctx"),
        ] {
            let first = respond(msg, ctx);
            assert!(!first.is_empty());
            assert_eq!(first, respond(msg, ctx));
        }
    }

    #[test]
    fn test_extract_policy_is_case_insensitive_on_context() {
        assert_eq!(
            extract_policy("WE ACCEPT RETURNS", PolicyKind::Return),
            PolicyKind::Return.sentence()
        );
    }
}
