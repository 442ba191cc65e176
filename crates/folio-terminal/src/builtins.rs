//! The portfolio command table.

use folio_types::error::Result;

use crate::registry::{Category, CommandRegistry, CommandSpec, RegistryBuilder};

/// Build the registry holding the built-in portfolio commands.
pub fn portfolio_registry() -> Result<CommandRegistry> {
    register_builtins(CommandRegistry::builder()).build()
}

/// Queue every built-in command and alias on a builder.
pub fn register_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .commands(essentials())
        .commands(info())
        .commands(simulation())
        .commands(environment())
        .commands(easter_eggs())
        .alias("?", "help")
}

// ---------------------------------------------------------------------------
// essentials
// ---------------------------------------------------------------------------

fn essentials() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("help", "List available commands")
            .category(Category::Essentials)
            .lines([
                "Available commands:",
                "  about       - Who is Younes?",
                "  stacks      - Tech arsenal",
                "  projects    - Case studies",
                "  experience  - Career timeline",
                "  contact     - Communication channels",
                "  setup       - Hardware & Software config",
                "  ls          - List directory contents",
                "  clear       - Clear the terminal",
            ]),
    ]
}

// ---------------------------------------------------------------------------
// bio & info
// ---------------------------------------------------------------------------

fn info() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("about", "Show short bio").lines([
            ">> IDENTITY_VERIFIED",
            "Younes El Bettate",
            "-----------------",
            "Self-taught Full-Stack Developer & Founder of OPICOM Tech.",
            "Based in Morocco 🇲🇦",
            "Focus: Building purposeful digital products, civic tech tools, and school management systems.",
        ]),
        CommandSpec::new("full_name", "Display full name").lines(["Younes El Bettate"]),
        CommandSpec::new("skills", "List key skills").lines([
            ">> LOADING_SKILL_MATRIX...",
            "- Architecture: API Design, Microservices, MVC",
            "- UI/UX: Motion Design, Rapid Prototyping, Design Systems",
            "- Strategy: Product Management, Agile/Scrum",
        ]),
        CommandSpec::new("stacks", "List core stacks").lines([
            ">> ANALYZING_CODEBASE...",
            "[BACKEND]   Python (Django, FastAPI), PostgreSQL, Redis, Docker",
            "[FRONTEND]  React, TypeScript, TailwindCSS, Framer Motion",
            "[MOBILE]    React Native, Expo",
            "[DESKTOP]   Tauri, Electron",
        ]),
        CommandSpec::new("projects", "Show highlight projects").lines([
            "1. Ksar-Data ....... [Civic Tech Dashboard]",
            "2. OPICOM Studio ... [Agency Portfolio]",
            "3. Restaurant OS ... [POS System]",
            "4. School MS ....... [EdTech Platform]",
            "",
            "Type \"open <project_name>\" (coming soon) to view details.",
        ]),
        CommandSpec::new("experience", "Show summary of experience").lines([
            ">> TIMELINE_FETCHED",
            "[202X - Now] Founder @ OPICOM Tech",
            "[202X - 202X] Freelance Full-Stack Developer",
            "-----------------",
            "4+ years building end-to-end solutions for schools, civic tech, and independent clients.",
        ]),
        CommandSpec::new("contact", "How to reach out").lines([
            ">> OPENING_CHANNELS...",
            "Email:    bt.younesse@gmail.com",
            "GitHub:   github.com/Younes-bt",
            "LinkedIn: /in/unesbt42",
        ]),
    ]
}

// ---------------------------------------------------------------------------
// simulation & utility
// ---------------------------------------------------------------------------

fn simulation() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("ls", "List files")
            .category(Category::Simulation)
            .lines([
                "drwxr-xr-x  younes  projects/",
                "drwxr-xr-x  younes  skills/",
                "drwxr-xr-x  younes  config/",
                "-rw-r--r--  younes  resume.pdf",
                "-rw-r--r--  younes  secret_plans.txt",
            ]),
        CommandSpec::new("pwd", "Print working directory")
            .category(Category::Simulation)
            .lines(["/home/guest/portfolio"]),
        CommandSpec::new("whoami", "Current user")
            .category(Category::Simulation)
            .lines(["guest@younes.dev (Access Level: VISITOR)"]),
        // Frozen when the table is built, not per invocation.
        CommandSpec::new("date", "Show date")
            .category(Category::Simulation)
            .lines([date_line(&chrono::Local::now())]),
    ]
}

/// Format a timestamp the way a browser prints `Date.prototype.toString()`,
/// minus the localized zone name.
fn date_line<Tz>(now: &chrono::DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

// ---------------------------------------------------------------------------
// dev environment
// ---------------------------------------------------------------------------

fn environment() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("setup", "Development environment")
            .category(Category::Environment)
            .lines([
                ">> FETCHING_SYSTEM_SPECS",
                "- Editor:   VS Code (Theme: One Dark Pro)",
                "- Font:     Geist Mono / JetBrains Mono",
                "- Terminal: Zsh + Oh My Zsh + Starship",
                "- Browser:  Arc / Chrome Developer Edition",
            ]),
    ]
}

// ---------------------------------------------------------------------------
// easter eggs
// ---------------------------------------------------------------------------

fn easter_eggs() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("sudo", "Superuser do")
            .category(Category::EasterEgg)
            .lines([
                "I like the way how you Think!!. This incident will be reported.",
                "(Nice try, though.)",
            ]),
        CommandSpec::new("cat", "Read file")
            .category(Category::EasterEgg)
            .lines(["usage: cat <filename> (File system access is restricted for guests)"]),
        CommandSpec::new("coffee", "Brew coffee")
            .category(Category::EasterEgg)
            .lines(["☕ Brewing...", "Error 418: I am a teapot."]),
        CommandSpec::new("exit", "Close terminal")
            .category(Category::EasterEgg)
            .lines(["There is no escape. You must hire me first."]),
    ]
}
