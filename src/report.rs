use colored::Colorize;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Section,
    Hint,
    Notice,
    Success,
    Failure,
    Plain,
}

/// Where user-facing messages go. Keeps presentation out of the wizard.
pub trait Reporter {
    fn emit(&mut self, tone: Tone, text: &str);

    fn success(&mut self, text: &str) {
        self.emit(Tone::Success, text);
    }

    fn failure(&mut self, text: &str) {
        self.emit(Tone::Failure, text);
    }

    fn hint(&mut self, text: &str) {
        self.emit(Tone::Hint, text);
    }

    /// A `=` rule, the title, and another rule.
    fn banner(&mut self, title: &str) {
        let rule = "=".repeat(60);
        self.emit(Tone::Heading, "");
        self.emit(Tone::Heading, &rule);
        self.emit(Tone::Heading, title);
        self.emit(Tone::Heading, &rule);
    }
}

/// Prints to stdout, coloured unless colours were turned off.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&mut self, tone: Tone, text: &str) {
        let styled = match tone {
            Tone::Heading => text.blue().bold(),
            Tone::Section => text.cyan(),
            Tone::Hint => text.bright_black(),
            Tone::Notice => text.yellow(),
            Tone::Success => text.green(),
            Tone::Failure => text.red(),
            Tone::Plain => text.normal(),
        };
        println!("{}", styled);
    }
}
