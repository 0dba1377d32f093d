use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    domain::widget::{AnimationStyle, Theme, WidgetConfig, WidgetType},
    utils::version,
};

#[derive(Parser, Debug, Default)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[command(flatten)]
    pub widget: WidgetArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides for the configured widget
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct WidgetArgs {
    #[arg(long, value_name = "PATH", help = "Testimonials JSON file")]
    pub testimonials: Option<PathBuf>,

    #[arg(
        short = 'w',
        long,
        value_name = "TYPE",
        help = "wall, masonry, carousel, single, list, floating, featured, awards or infinite-scroll"
    )]
    pub widget_type: Option<WidgetType>,

    #[arg(long, value_name = "THEME", help = "default, dark or auto")]
    pub theme: Option<Theme>,

    #[arg(long, value_name = "STYLE", help = "none, fade, slide, scale or bounce")]
    pub animation: Option<AnimationStyle>,

    #[arg(long, overrides_with = "no_autoplay", help = "Advance the carousel automatically")]
    pub autoplay: bool,

    #[arg(long, overrides_with = "autoplay")]
    pub no_autoplay: bool,

    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Show at most N testimonials"
    )]
    pub max: Option<i64>,
}

impl WidgetArgs {
    pub fn apply_to(&self, widget: &mut WidgetConfig) {
        if let Some(widget_type) = self.widget_type {
            widget.widget_type = widget_type;
        }
        if let Some(theme) = self.theme {
            widget.settings.theme = theme;
        }
        if let Some(animation) = self.animation {
            widget.settings.animation_style = animation;
        }
        if self.autoplay {
            widget.settings.autoplay = true;
        }
        if self.no_autoplay {
            widget.settings.autoplay = false;
        }
        if let Some(max) = self.max {
            widget.settings.max_testimonials = max;
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Manage the account on the configured backend
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum AccountCommand {
    /// Register a new account
    SignUp {
        email: String,
        #[arg(long, help = "Read from stdin when omitted")]
        password: Option<String>,
        #[arg(long)]
        username: Option<String>,
        /// Extra profile attributes as KEY=VALUE
        #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        attrs: Vec<(String, String)>,
    },
    /// Sign in with email and password
    SignIn {
        email: String,
        #[arg(long, help = "Read from stdin when omitted")]
        password: Option<String>,
    },
    /// End the stored session
    SignOut,
    /// Show the signed-in user
    Whoami,
    /// Check whether a username is still free
    CheckUsername { username: String },
    /// Check a username against the format rules
    ValidateUsername { username: String },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))
}
