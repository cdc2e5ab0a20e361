use crate::defaults::Defaults;
use crate::prompt::{PromptError, Prompter};
use crate::report::{Reporter, Tone};
use crate::storage;
use crate::traefik::{build_rule, generate_labels, render_block, LabelConfig, RouteMatch};
use crate::validation::{is_valid_host, is_valid_namespace, is_valid_port};
use log::{debug, error, info, warn};

/// Walks the user through every field, one question at a time.
pub struct Wizard<'a, P: Prompter, R: Reporter> {
    prompter: &'a mut P,
    reporter: &'a mut R,
    defaults: &'a Defaults,
}

impl<'a, P: Prompter, R: Reporter> Wizard<'a, P, R> {
    pub fn new(prompter: &'a mut P, reporter: &'a mut R, defaults: &'a Defaults) -> Self {
        Wizard {
            prompter,
            reporter,
            defaults,
        }
    }

    /// Runs the whole session and returns the label block that was shown.
    ///
    /// A failed file write is reported and does not fail the session.
    pub fn run(&mut self) -> Result<Vec<String>, PromptError> {
        self.reporter.banner("TRAEFIK LABEL GENERATOR");
        self.reporter.hint("Generates Traefik labels for a docker-compose.yml service\n");

        let config = self.collect()?;
        self.preview(&config);

        let block = render_block(&generate_labels(&config));
        info!("Generated {} labels for namespace {}", block.len() - 1, config.namespace);

        self.reporter.banner("GENERATED TRAEFIK LABELS");
        self.reporter.emit(Tone::Plain, "");
        for line in &block {
            self.reporter.emit(Tone::Plain, line);
        }

        self.offer_save(&block)?;

        let farewell = "\nDone! Thanks for using the Traefik Label Generator\n";
        self.reporter.emit(Tone::Heading, farewell);
        Ok(block)
    }

    /// Asks every question in order and builds the record.
    pub fn collect(&mut self) -> Result<LabelConfig, PromptError> {
        let namespace = self.prompt_namespace()?;
        let rule = build_rule(&self.prompt_routes()?);
        let entrypoints = self.prompt_entrypoints()?;
        let port = self.prompt_port()?;
        let middlewares = self.prompt_middlewares()?;
        let service_name = self.prompt_service_name()?;
        let network = self.prompt_network()?;

        Ok(LabelConfig {
            namespace,
            network,
            rule,
            port,
            entrypoints,
            middlewares,
            service_name,
        })
    }

    fn prompt_namespace(&mut self) -> Result<String, PromptError> {
        loop {
            let namespace = self.prompter.input("1. Namespace (e.g. adminer, api-gateway)")?;

            if namespace.is_empty() {
                self.reporter.failure("   Namespace cannot be empty!");
                continue;
            }

            if !is_valid_namespace(&namespace) {
                warn!("Rejected namespace: {:?}", namespace);
                self.reporter.failure(
                    "   Namespace may only contain letters, digits, dash (-) and underscore (_)",
                );
                continue;
            }

            self.reporter.success("   Namespace is valid");
            debug!("Namespace accepted: {}", namespace);
            return Ok(namespace);
        }
    }

    /// Collects at least one host, each with an optional path prefix.
    fn prompt_routes(&mut self) -> Result<Vec<RouteMatch>, PromptError> {
        let mut routes = Vec::new();

        self.reporter.emit(Tone::Section, "\n2. Host and path");
        self.reporter.hint("   You can add several host/path rules\n");

        loop {
            let host = self.prompt_host()?;
            let prefix = self.prompter.input("   Path prefix (optional, e.g. /api/v1)")?;

            let route = RouteMatch::new(&host, &prefix);
            self.reporter.success(&format!("   Rule: {}", route));
            debug!("Route accepted: {}", route);
            routes.push(route);

            if !self.prompter.confirm("   Add another host/path?")? {
                break;
            }
        }

        Ok(routes)
    }

    fn prompt_host(&mut self) -> Result<String, PromptError> {
        loop {
            let host = self.prompter.input("   Host (e.g. api.domain.com)")?;

            if host.is_empty() {
                self.reporter.failure("   Host cannot be empty!");
                continue;
            }

            if !is_valid_host(&host) {
                warn!("Rejected host: {:?}", host);
                self.reporter.failure("   Invalid host format!");
                continue;
            }

            self.reporter.success("   Host is valid");
            return Ok(host);
        }
    }

    fn prompt_entrypoints(&mut self) -> Result<String, PromptError> {
        self.reporter.emit(Tone::Section, "\n3. Entrypoints");
        self.reporter.hint("   An entrypoint is a Traefik listener (e.g. web, websecure)");

        let question = format!("   Entrypoints (default: {})", self.defaults.entrypoint);
        let answer = self.prompter.input(&question)?;
        let entrypoints = or_default(answer, &self.defaults.entrypoint);

        self.reporter.success(&format!("   Using entrypoint: {}", entrypoints));
        debug!("Entrypoints accepted: {}", entrypoints);
        Ok(entrypoints)
    }

    fn prompt_port(&mut self) -> Result<String, PromptError> {
        self.reporter.emit(Tone::Section, "\n4. Container port");
        self.reporter.hint("   Internal container port that Traefik forwards to");

        loop {
            let question = format!("   Port (default: {})", self.defaults.port);
            let answer = self.prompter.input(&question)?;
            let port = or_default(answer, &self.defaults.port);

            if !is_valid_port(&port) {
                warn!("Rejected port: {:?}", port);
                self.reporter.failure("   Port must be a number between 1 and 65535");
                continue;
            }

            self.reporter.success(&format!("   Port is valid: {}", port));
            debug!("Port accepted: {}", port);
            return Ok(port);
        }
    }

    /// Suggested middlewares first, then any number of custom names.
    fn prompt_middlewares(&mut self) -> Result<String, PromptError> {
        let mut selected: Vec<String> = Vec::new();

        self.reporter.emit(Tone::Section, "\n5. Middlewares");
        self.reporter.hint("   A middleware processes the request before it reaches the service");

        if self.prompter.confirm("   Use middlewares?")? {
            self.reporter.hint("\n   Choose from the commonly used middlewares:");

            for mw in &self.defaults.common_middlewares {
                if self.prompter.confirm(&format!("   • {}?", mw))? {
                    self.reporter.success(&format!("     {} added", mw));
                    selected.push(mw.clone());
                }
            }

            self.reporter.hint("\n   Add custom middlewares (if any):");
            loop {
                let question = "   Custom middleware name (leave blank when done)";
                let custom = self.prompter.input(question)?;
                if custom.is_empty() {
                    break;
                }
                self.reporter.success(&format!("   {} added", custom));
                selected.push(custom);
            }
        }

        if !selected.is_empty() {
            let total = format!("\n   {} middleware(s) selected", selected.len());
            self.reporter.success(&total);
        }

        debug!("Middlewares accepted: {:?}", selected);
        Ok(selected.join(","))
    }

    fn prompt_service_name(&mut self) -> Result<String, PromptError> {
        self.reporter.emit(Tone::Section, "\n6. Service name");
        let notice = "   Leave blank to let Traefik use implicit service discovery";
        self.reporter.emit(Tone::Notice, notice);
        self.reporter.hint("   (the router attaches to this container's own service)");

        let service_name = self.prompter.input("   Service name (optional)")?;

        if service_name.is_empty() {
            self.reporter.success("   Using implicit service discovery");
        } else {
            self.reporter.success(&format!("   Using service: {}", service_name));
        }

        Ok(service_name)
    }

    fn prompt_network(&mut self) -> Result<String, PromptError> {
        self.reporter.emit(Tone::Section, "\n7. Docker network");
        self.reporter.hint("   Docker network shared by Traefik and this container");

        let question = format!("   Network (default: {})", self.defaults.network);
        let answer = self.prompter.input(&question)?;
        let network = or_default(answer, &self.defaults.network);

        self.reporter.success(&format!("   Using network: {}", network));
        debug!("Network accepted: {}", network);
        Ok(network)
    }

    fn preview(&mut self, config: &LabelConfig) {
        self.reporter.banner("CONFIGURATION PREVIEW");

        let mut rows = vec![
            ("Namespace", &config.namespace),
            ("Network", &config.network),
            ("Entrypoints", &config.entrypoints),
            ("Port", &config.port),
            ("Rule", &config.rule),
        ];
        if !config.service_name.is_empty() {
            rows.push(("Service", &config.service_name));
        }
        if !config.middlewares.is_empty() {
            rows.push(("Middlewares", &config.middlewares));
        }

        self.reporter.emit(Tone::Plain, "");
        for (name, value) in rows {
            let row = format!("{:<16} {}", format!("{}:", name), value);
            self.reporter.emit(Tone::Plain, &row);
        }
    }

    fn offer_save(&mut self, block: &[String]) -> Result<(), PromptError> {
        if !self.prompter.confirm("\nSave output to file?")? {
            return Ok(());
        }

        let question = format!("   File name (default: {})", self.defaults.output_file);
        let answer = self.prompter.input(&question)?;
        let filename = or_default(answer, &self.defaults.output_file);

        match storage::save_labels(&filename, block) {
            Ok(()) => self.reporter.success(&format!("\nOutput saved to: {}", filename)),
            Err(e) => {
                error!("Failed to write {}: {}", filename, e);
                self.reporter.failure(&format!("\nFailed to save file: {}", e));
            }
        }
        Ok(())
    }
}

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}
