use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgMatches, Parser};

use psl_extract::{
    hostname_from_url, Host, HostField, SuffixResolver, DEFAULT_CACHE_FILE, DEFAULT_SUFFIX_URL,
};

const NOTES: &str = "\
Notes:
   If multiple fields are requested, they are printed in the order given,
   separated by a slash.

   A cache file (suffixes.txt by default) holding the public suffixes is
   created on your local system. Use -u to download the list again.

   RFC 2606: reserved names are returned as a suffix if a label precedes
   them (myapp.localhost). Reserved names are: test, example, invalid,
   localhost.

Examples:
   Delete cache:
    $ psl-extract -u
   Delete cache and enter interactive mode:
    $ psl-extract -u -i
   Get all information about www.example.co.uk:
    $ psl-extract -f -o -s -p -d -t -c http://www.example.co.uk/index.html";

/// Extract suffixes and organisation from a URL
#[derive(Parser, Debug)]
#[command(name = "psl-extract", version)]
#[command(about = "Extract suffixes and organisation from a URL")]
#[command(after_help = NOTES)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Force the suffix cache to be downloaded again
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Interactive mode, reads URLs from stdin until "bye"
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Print the full hostname
    #[arg(short = 'f', long = "hostname")]
    pub hostname: bool,

    /// Print the organisation
    #[arg(short = 'o', long = "organisation")]
    pub organisation: bool,

    /// Print the public suffix
    #[arg(short = 's', long = "suffix")]
    pub suffix: bool,

    /// Print the subdomain
    #[arg(short = 'p', long = "subdomain")]
    pub subdomain: bool,

    /// Print the domain (organisation + suffix)
    #[arg(short = 'd', long = "domain")]
    pub domain: bool,

    /// Print the TLD
    #[arg(short = 't', long = "tld")]
    pub tld: bool,

    /// Print the country code
    #[arg(short = 'c', long = "country")]
    pub country: bool,

    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Log progress and errors
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suffix cache file
    #[arg(long = "cache-file", value_name = "PATH", default_value = DEFAULT_CACHE_FILE)]
    pub cache_file: PathBuf,

    /// Public suffix list URL
    #[arg(long = "url", value_name = "URL", default_value = DEFAULT_SUFFIX_URL)]
    pub list_url: String,

    /// Drop downloaded suffixes with this many dots or more
    #[arg(long = "max-depth", value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// URL or hostname to split
    pub target: Option<String>,
}

impl Cli {
    /// Requested output fields, in command line order
    pub fn fields(&self, matches: &ArgMatches) -> Vec<HostField> {
        let flags = [
            ("hostname", self.hostname, HostField::Hostname),
            ("organisation", self.organisation, HostField::Organisation),
            ("suffix", self.suffix, HostField::Suffix),
            ("subdomain", self.subdomain, HostField::Subdomain),
            ("domain", self.domain, HostField::Domain),
            ("tld", self.tld, HostField::Tld),
            ("country", self.country, HostField::Country),
        ];

        let mut fields: Vec<(usize, HostField)> = flags
            .into_iter()
            .filter(|(_, set, _)| *set)
            .map(|(id, _, field)| (matches.index_of(id).unwrap_or(usize::MAX), field))
            .collect();
        fields.sort_by_key(|(index, _)| *index);
        fields.into_iter().map(|(_, field)| field).collect()
    }
}

/// Print one host as a block of labelled fields, or as JSON
pub fn write_report<W: Write>(out: &mut W, host: &Host, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(host).map_err(io::Error::other)?;
        return writeln!(out, "{}", line);
    }

    let rule = "-".repeat(52);
    writeln!(out, "{}", rule)?;
    for field in HostField::ALL {
        let label = format!("{}:", field.label());
        writeln!(out, "{:<14}{}", label, host.field(field))?;
    }
    writeln!(out, "{}", rule)
}

/// Read URLs until "bye" or end of input, printing each resolved host
pub fn interactive<R: BufRead, W: Write>(
    resolver: &SuffixResolver,
    input: R,
    out: &mut W,
    json: bool,
) -> io::Result<()> {
    writeln!(out, "Please, enter a url (or \"bye\" to exit) :")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token == "bye" {
                writeln!(out, "Bye bye, have fun !")?;
                return Ok(());
            }

            let host = resolver.resolve(hostname_from_url(token));
            write_report(out, &host, json)?;
        }
        writeln!(out, "Please, enter a url (or \"bye\" to exit) :")?;
        out.flush()?;
    }
    Ok(())
}
