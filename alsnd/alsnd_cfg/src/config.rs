use super::parsing::Raw_Config;
use super::value::Cfg_Value;
use std::collections::HashMap;
use std::path::Path;

/// Flat table of cfg vars, keyed by the `section/key` path of each entry.
pub struct Config {
    cfg_var_table: HashMap<String, Cfg_Value>,
}

impl Config {
    pub fn new_from_dir(dir_path: &Path) -> std::io::Result<Config> {
        #[cfg(debug_assertions)]
        let start_t = std::time::Instant::now();

        let config = Self::new_from_raw(Raw_Config::new_from_dir(dir_path)?);

        #[cfg(debug_assertions)]
        {
            let diff = start_t.elapsed();
            lok!(
                "Loaded cfg dir {:?} in {} ms.",
                dir_path,
                diff.as_secs_f32() * 1000.0,
            );
        }

        Ok(config)
    }

    pub fn new_from_str(src: &str) -> Config {
        Self::new_from_raw(Raw_Config::new_from_str(src))
    }

    fn new_from_raw(raw: Raw_Config) -> Config {
        let mut cfg_var_table = HashMap::new();
        // Flatten section/entries into `section/key` paths
        for section in raw.sections.into_iter() {
            for entry in section.entries.into_iter() {
                let name = format!("{}/{}", section.header, entry.key);
                lverbose!("Loading cfg var {} = {:?}", name, entry.value);

                cfg_var_table.insert(name, entry.value);
            }
        }
        Config { cfg_var_table }
    }

    pub fn read_cfg(&self, path: &str) -> Option<&Cfg_Value> {
        self.cfg_var_table.get(path)
    }

    pub fn read_f32(&self, path: &str) -> Option<f32> {
        self.read_cfg(path).and_then(Cfg_Value::as_f32)
    }

    pub fn read_string(&self, path: &str) -> Option<&str> {
        match self.read_cfg(path) {
            Some(Cfg_Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn n_vars(&self) -> usize {
        self.cfg_var_table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flattens_sections_into_paths() {
        let cfg = Config::new_from_str(
            "/audio\nsounds_root res/sfx\ndefault_volume 0.5\nmuted false\n/other\nx 3\n",
        );
        assert_eq!(cfg.n_vars(), 4);
        assert_eq!(cfg.read_string("audio/sounds_root"), Some("res/sfx"));
        assert_eq!(cfg.read_f32("audio/default_volume"), Some(0.5));
        assert_eq!(cfg.read_cfg("audio/muted"), Some(&Cfg_Value::Bool(false)));
        assert_eq!(cfg.read_cfg("other/x"), Some(&Cfg_Value::Int(3)));
        assert_eq!(cfg.read_f32("audio/muted"), None);
        assert_eq!(cfg.read_string("audio/nope"), None);
    }

    #[test]
    fn loads_cfg_files_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut f = std::fs::File::create(dir.path().join("audio.cfg")).unwrap();
            writeln!(f, "/audio").unwrap();
            writeln!(f, "default_volume 1 # full").unwrap();
        }
        {
            let mut f = std::fs::File::create(dir.path().join("ignored.txt")).unwrap();
            writeln!(f, "/ignored").unwrap();
            writeln!(f, "x 1").unwrap();
        }

        let cfg = Config::new_from_dir(dir.path()).unwrap();
        assert_eq!(cfg.n_vars(), 1);
        assert_eq!(cfg.read_f32("audio/default_volume"), Some(1.0));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::new_from_dir(&dir.path().join("nope")).is_err());
    }
}
