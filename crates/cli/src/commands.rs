use chrono::NaiveDate;

use stock_dashboard_core::models::region::Region;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Regions,
    Region { region: Region, enabled: bool },
    Stocks { filter: Option<String> },
    Add(String),
    Remove(String),
    Selected,
    Range { start: NaiveDate, end: NaiveDate },
    Capital(f64),
    Show,
    Chart(String),
    Json,
    Quit,
}

/// Parse a shell line into a command. Errors are user-facing strings.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(String::new());
    };

    match head {
        "help" | "?" => Ok(Command::Help),
        "regions" => Ok(Command::Regions),
        "region" => {
            let name = parts.next().ok_or("usage: region <brazil|usa|europe> <on|off>")?;
            let state = parts.next().ok_or("usage: region <brazil|usa|europe> <on|off>")?;
            let region = parse_region(name)?;
            let enabled = match state {
                "on" => true,
                "off" => false,
                other => return Err(format!("expected on/off, got '{other}'")),
            };
            Ok(Command::Region { region, enabled })
        }
        "stocks" => Ok(Command::Stocks {
            filter: parts.next().map(str::to_string),
        }),
        "add" => {
            let query = parts.next().ok_or("usage: add <symbol>")?;
            Ok(Command::Add(query.to_string()))
        }
        "remove" | "rm" => {
            let query = parts.next().ok_or("usage: remove <symbol>")?;
            Ok(Command::Remove(query.to_string()))
        }
        "selected" => Ok(Command::Selected),
        "range" => {
            let start = parse_date(parts.next().ok_or("usage: range <start> <end>")?)?;
            let end = parse_date(parts.next().ok_or("usage: range <start> <end>")?)?;
            Ok(Command::Range { start, end })
        }
        "capital" => {
            let raw = parts.next().ok_or("usage: capital <amount>")?;
            let amount: f64 = raw
                .parse()
                .map_err(|_| format!("'{raw}' is not a number"))?;
            Ok(Command::Capital(amount))
        }
        "show" => Ok(Command::Show),
        "chart" => {
            let path = parts.next().ok_or("usage: chart <output.png>")?;
            Ok(Command::Chart(path.to_string()))
        }
        "json" => Ok(Command::Json),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn parse_region(name: &str) -> Result<Region, String> {
    match name.to_lowercase().as_str() {
        "brazil" | "br" => Ok(Region::Brazil),
        "usa" | "us" => Ok(Region::Usa),
        "europe" | "eu" => Ok(Region::Europe),
        other => Err(format!("unknown region '{other}'")),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("'{raw}' is not a YYYY-MM-DD date"))
}

pub const HELP: &str = "\
commands:
  regions                      list regions and their toggle state
  region <name> <on|off>       enable or disable a region
  stocks [filter]              list selectable stocks
  add <symbol>                 select a stock by symbol or label
  remove <symbol>              deselect a stock
  selected                     show the current selection
  range <start> <end>          set the date window (YYYY-MM-DD)
  capital <amount>             set the starting capital (0 = off)
  show                         fetch, filter and print performance
  chart <output.png>           render the price chart to a PNG
  json                         print the full view as JSON
  quit                         leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_toggle() {
        assert_eq!(
            parse("region brazil off").unwrap(),
            Command::Region {
                region: Region::Brazil,
                enabled: false
            }
        );
    }

    #[test]
    fn parses_range() {
        let cmd = parse("range 2015-01-01 2020-06-30").unwrap();
        match cmd {
            Command::Range { start, end } => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
                assert_eq!(end, NaiveDate::from_ymd_opt(2020, 6, 30).unwrap());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_date() {
        assert!(parse("range 2015-13-01 2020-01-01").is_err());
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse("frobnicate").is_err());
    }

    #[test]
    fn empty_line_is_silent_error() {
        assert_eq!(parse("   "), Err(String::new()));
    }
}
