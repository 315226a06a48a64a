use std::fmt::Display;

use crate::types;

mod pretty;

pub enum Formatter {
    Pretty(pretty::Pretty),
    Empty(&'static str),
}

impl Formatter {
    pub fn new(result: types::FullResult) -> Self {
        if !result.items.is_empty() {
            Formatter::Pretty(pretty::Pretty::new(result))
        } else if result.config.show_all {
            Formatter::Empty("🎉 No pod webhooks found!")
        } else {
            Formatter::Empty("🎉 No risky webhooks found!")
        }
    }
}

impl Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formatter::Pretty(p) => p.fmt(f),
            Formatter::Empty(message) => f.write_str(message),
        }
    }
}
