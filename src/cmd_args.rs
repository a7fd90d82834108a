use std::ffi::OsString;

pub use clap::Parser;

use crate::form::Field;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Form route. `/students/add` opens the form in Add mode,
    /// `/students/<id>` in Edit mode.
    #[clap(help = "form route, e.g. /students/add or /students/5")]
    route: String,

    /// Base URL of the students API. Overrides ROSTERLY_API_URL and the
    /// built-in default.
    #[clap(long, help = "API base URL")]
    api_url: Option<String>,

    #[clap(long, help = "email address")]
    email: Option<String>,

    #[clap(long, help = "gender (Male, Female or Other)")]
    gender: Option<String>,

    #[clap(long, help = "country")]
    country: Option<String>,

    #[clap(long, help = "first name")]
    first_name: Option<String>,

    #[clap(long, help = "last name")]
    last_name: Option<String>,

    #[clap(long, help = "avatar as Base64 image data")]
    avatar: Option<String>,

    #[clap(long, help = "BTC address")]
    btc_address: Option<String>,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    route: String,
    api_url: Option<String>,
    edits: Vec<(Field, String)>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let mut edits = Vec::new();
        let mut push = |field: Field, value: Option<String>| {
            if let Some(value) = value {
                edits.push((field, value));
            }
        };
        push(Field::Email, args.email);
        push(Field::Gender, args.gender);
        push(Field::Country, args.country);
        push(Field::FirstName, args.first_name);
        push(Field::LastName, args.last_name);
        push(Field::Avatar, args.avatar);
        push(Field::BtcAddress, args.btc_address);

        Self {
            route: args.route,
            api_url: args.api_url,
            edits,
            verbose: args.verbose,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn api_url(&self) -> Option<&String> {
        self.api_url.as_ref()
    }

    /// Field edits supplied on the command line, in a fixed field order.
    pub fn field_edits(&self) -> &[(Field, String)] {
        &self.edits
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_route_only() {
        let args = CommandLineArgs::parse_from(["program", "/students/add"]);
        assert_eq!(args.route(), "/students/add");
        assert!(args.api_url().is_none());
        assert!(args.field_edits().is_empty());
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_field_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "/students/5",
            "--email",
            "a@b.com",
            "--first-name",
            "Ada",
        ]);
        assert_eq!(args.route(), "/students/5");
        assert_eq!(
            args.field_edits(),
            [
                (Field::Email, "a@b.com".to_string()),
                (Field::FirstName, "Ada".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_args_api_url_and_verbose() {
        let args = CommandLineArgs::parse_from([
            "program",
            "/students/add",
            "--api-url",
            "http://localhost:9000/",
            "-v",
        ]);
        assert_eq!(
            args.api_url().map(String::as_str),
            Some("http://localhost:9000/")
        );
        assert!(args.verbose());
    }
}
