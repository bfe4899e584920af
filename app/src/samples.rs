//! Built-in sample corpus and input hints.

/// A named sample document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "contact",
        description: "Contact details with emails and phone numbers",
        text: "Contact John Smith at john.smith@company.com or call (555) 123-4567. \
               Support: support@techcorp.org, 555.987.6543.",
    },
    Sample {
        name: "receipt",
        description: "Order receipt with amounts, a time and a tracking link",
        text: "Order total: $1,249.99 (tax $89.50). Refund of $29.99 issued at 3:45 PM. \
               Details: https://shop.example.com/orders/view?id=8812",
    },
    Sample {
        name: "meeting",
        description: "Meeting notes with times and a dial-in number",
        text: "Meeting time: 2:30 PM in room 4B. Standup moved to 09:15, retro at 16:00. \
               Dial-in: 555-010-2030.",
    },
    Sample {
        name: "social",
        description: "Social post with hashtags and a link",
        text: "Loving the new release! #RustLang #OpenSource #RustLang \
               Read more at http://blog.example.org/posts/release.html#notes",
    },
    Sample {
        name: "mixed",
        description: "A little of everything",
        text: "Hi team, ping jane.doe@example.org or (555) 010-9999 about the $2,500.00 invoice \
               due at 11:30 AM. Portal: https://billing.example.com:8443/invoices \
               #finance #urgent",
    },
];

/// Short inputs shown as hints while waiting for text.
pub const PLACEHOLDERS: &[&str] = &[
    "Email: john.smith@company.com, support@techcorp.org",
    "Call (555) 123-4567 before 5:00 PM",
    "Price: $29.99 at https://shop.example.com/deals",
    "#CustomerService #CustomerService",
];

/// Look up a sample by name, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES
        .iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(name))
}

/// Placeholder hint for a rotation index.
#[must_use]
pub fn placeholder(index: usize) -> &'static str {
    PLACEHOLDERS[index % PLACEHOLDERS.len()]
}
