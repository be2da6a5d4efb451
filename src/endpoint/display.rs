//! Display implementations for endpoint plans

use colored::Colorize;

use super::{RestEndpoint, RestHandlerBinding};

impl RestEndpoint {
    pub fn pretty_print(&self) {
        println!("{} ({:?})", self.name.bold(), self.kind);
        println!("    conf: {}", self.conf_name);

        match &self.handler {
            RestHandlerBinding::Named { name } => {
                println!("    handler: {name}");
            }
            RestHandlerBinding::Custom { module, class } => {
                println!("    handler: {}.{} {}", module, class, "(custom)".dimmed());
            }
        }

        for entity in &self.entities {
            println!("    {}: [", entity.name.cyan());
            for field in entity.field_names() {
                println!("        {field},");
            }
            println!("    ],");
        }
    }
}
