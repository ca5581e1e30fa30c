use crate::value::Cfg_Value;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

const HEADER_SEPARATOR: char = '/';
const COMMENT_START: char = '#';

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg_Entry {
    pub key: String,
    pub value: Cfg_Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg_Section {
    pub header: String,
    pub entries: Vec<Cfg_Entry>,
}

pub struct Raw_Config {
    pub sections: Vec<Cfg_Section>,
}

impl Raw_Config {
    pub fn new_from_dir(dir_path: &Path) -> std::io::Result<Raw_Config> {
        Ok(Raw_Config {
            sections: parse_config_dir(dir_path)?,
        })
    }

    pub fn new_from_str(src: &str) -> Raw_Config {
        Raw_Config {
            sections: parse_lines(src.lines().map(String::from), Path::new("<string>")),
        }
    }
}

pub fn parse_config_dir(dir_path: &Path) -> std::io::Result<Vec<Cfg_Section>> {
    if dir_path.is_dir() {
        let mut sections = vec![];
        let mut n_parsed = 0;
        for entry in fs::read_dir(dir_path)? {
            match entry {
                Ok(ref e) if e.path().extension() == Some(OsStr::new("cfg")) => {
                    n_parsed += 1;
                    sections.append(&mut parse_config_file(&e.path())?)
                }
                Err(msg) => {
                    lerr!("Error reading cfg dir {:?}: {}", dir_path, msg);
                }
                _ => (),
            }
        }
        lverbose!("Parsed {} cfg files.", n_parsed);
        Ok(sections)
    } else {
        lverbose!(
            "Path {:?} given to parse_config_dir is a single file.",
            dir_path
        );
        parse_config_file(dir_path)
    }
}

// @Speed: this function can likely be optimized quite a lot.
fn parse_config_file(path: &Path) -> std::io::Result<Vec<Cfg_Section>> {
    let file = File::open(path)?;
    let lines = BufReader::new(file).lines().filter_map(Result::ok);
    Ok(parse_lines(lines, path))
}

fn parse_lines(lines: impl Iterator<Item = String>, path: &Path) -> Vec<Cfg_Section> {
    let mut sections = vec![];
    let mut cur_section = Cfg_Section {
        header: String::from(""),
        entries: vec![],
    };

    let lines = lines.map(|mut line| {
        if let Some(comment_start) = line.find(COMMENT_START) {
            line.truncate(comment_start);
        }
        line
    });

    for (lineno, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix(HEADER_SEPARATOR) {
            if !cur_section.header.is_empty() {
                sections.push(cur_section);
                cur_section = Cfg_Section {
                    header: String::from(""),
                    entries: vec![],
                };
            }
            cur_section.header = String::from(header);
        } else {
            if cur_section.header.is_empty() {
                lwarn!(
                    "Line {} in file {:?} is outside any section and will be ignored: `{}`",
                    lineno + 1,
                    path,
                    line
                );
                continue;
            }
            let mut tokens = line.splitn(2, ' ');
            let key = tokens.next().unwrap_or("");
            let val = tokens.next().unwrap_or("");
            cur_section.entries.push(Cfg_Entry {
                key: String::from(key),
                value: parse_value(val.trim_start()),
            });
        }
    }
    if !cur_section.header.is_empty() {
        sections.push(cur_section);
    }

    sections
}

fn parse_value(raw: &str) -> Cfg_Value {
    if raw.is_empty() {
        Cfg_Value::Nil
    }
    // @Speed: this is easy but inefficient! An actual lexer would be faster, but for now this is ok.
    else if let Ok(v) = raw.parse::<i32>() {
        Cfg_Value::Int(v)
    } else if let Ok(v) = raw.parse::<f32>() {
        Cfg_Value::Float(v)
    } else if let Ok(v) = raw.parse::<bool>() {
        Cfg_Value::Bool(v)
    } else {
        Cfg_Value::String(String::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let lines: Vec<String> = vec![
            "# This is a sample file.",
            " /audio  ",
            "  ",
            "entry_int 1",
            "entry_bool   false",
            "  entry_nil",
            "sounds_root assets/sounds  ",
            "entry_multi_string foo bar   baz #this is a comment#",
            "entry_int_neg -2",
            "",
            "   ###",
            "default_volume 0.8 # comment",
            "/other_header",
            "",
        ]
        .iter()
        .map(|&s| String::from(s))
        .collect();
        let parsed = parse_lines(lines.into_iter(), &std::path::PathBuf::new());

        assert_eq!(parsed.len(), 2);

        let sec1 = &parsed[0];
        assert_eq!(sec1.header, "audio");
        assert_eq!(sec1.entries.len(), 7);

        assert_eq!(sec1.entries[0].key, "entry_int");
        assert_eq!(sec1.entries[0].value, Cfg_Value::Int(1));
        assert_eq!(sec1.entries[1].key, "entry_bool");
        assert_eq!(sec1.entries[1].value, Cfg_Value::Bool(false));
        assert_eq!(sec1.entries[2].key, "entry_nil");
        assert_eq!(sec1.entries[2].value, Cfg_Value::Nil);
        assert_eq!(sec1.entries[3].key, "sounds_root");
        assert_eq!(
            sec1.entries[3].value,
            Cfg_Value::String(String::from("assets/sounds"))
        );
        assert_eq!(sec1.entries[4].key, "entry_multi_string");
        assert_eq!(
            sec1.entries[4].value,
            Cfg_Value::String(String::from("foo bar   baz"))
        );
        assert_eq!(sec1.entries[5].key, "entry_int_neg");
        assert_eq!(sec1.entries[5].value, Cfg_Value::Int(-2));
        assert_eq!(sec1.entries[6].key, "default_volume");
        assert_eq!(sec1.entries[6].value, Cfg_Value::Float(0.8));

        let sec2 = &parsed[1];
        assert_eq!(sec2.header, "other_header");
        assert_eq!(sec2.entries.len(), 0);
    }

    #[test]
    fn entries_outside_sections_are_ignored() {
        let raw = Raw_Config::new_from_str("orphan 1\n/audio\nvolume 1\n");
        assert_eq!(raw.sections.len(), 1);
        assert_eq!(raw.sections[0].entries.len(), 1);
        assert_eq!(raw.sections[0].entries[0].key, "volume");
    }
}
