use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    config::{Artifact, Config},
    error::{Error, Result},
    prompt::Confirm,
    template::{Placeholders, Template},
    utils::{strip_extension, today},
    ASSET_DIR,
};

/// a file that a run is going to write, only handed out for enabled artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    artifact: Artifact,
    fname: String,
    template: PathBuf,
    relative: PathBuf,
    path: PathBuf,
}

impl Target {
    pub fn artifact(&self) -> Artifact {
        self.artifact
    }

    /// path relative to the working directory
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// how a run ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// the files written, in order
    Written(Vec<PathBuf>),
    /// overwriting was declined, nothing was touched
    Aborted,
}

/// writes the page skeleton into a working directory
#[derive(Debug)]
pub struct Scaffolder {
    work_dir: PathBuf,
    config: Config,
}

impl Scaffolder {
    pub fn new<T: AsRef<Path>>(work_dir: T, config: Config) -> Result<Self> {
        let work_dir = work_dir.as_ref();
        if !work_dir.is_dir() {
            return Err(Error::InvalidWorkDir(work_dir.into()));
        }
        Ok(Self {
            work_dir: work_dir.into(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// where css and js live relative to the html, either bare or under the asset directory
    fn relative(&self, artifact: Artifact, fname: &str) -> PathBuf {
        if self.config.asset && artifact != Artifact::Html {
            Path::new(ASSET_DIR).join(fname)
        } else {
            PathBuf::from(fname)
        }
    }

    /// the enabled artifacts and their output paths, in render order
    pub fn targets(&self) -> Vec<Target> {
        Artifact::ALL
            .into_iter()
            .filter_map(|artifact| {
                let cfg = self.config.artifact(artifact)?;
                let relative = self.relative(artifact, &cfg.fname);
                Some(Target {
                    artifact,
                    fname: cfg.fname.clone(),
                    template: cfg.template.clone(),
                    path: self.work_dir.join(&relative),
                    relative,
                })
            })
            .collect()
    }

    // the html refers to assets with `/` whatever the platform
    fn reference(&self, artifact: Artifact) -> String {
        match self.config.artifact(artifact) {
            Some(cfg) if self.config.asset => format!("{ASSET_DIR}/{}", cfg.fname),
            Some(cfg) => cfg.fname.clone(),
            None => String::new(),
        }
    }

    /// the values the template of a target can use
    pub fn placeholders(&self, target: &Target, date: &str) -> Placeholders<'static> {
        let fname = &target.fname;
        let author = &self.config.author;

        let mut values = Placeholders::new();
        values.insert("AUTHOR", author.name.clone());
        values.insert("EMAIL", author.email.clone());
        values.insert("DATE", date.to_string());
        if target.artifact == Artifact::Html {
            values.insert("TITLE", strip_extension(fname).to_string());
            values.insert("CSS_FILE", self.reference(Artifact::Css));
            values.insert("JS_FILE", self.reference(Artifact::Js));
        }
        values.insert("FNAME", fname.clone());
        values
    }

    pub fn render(&self, target: &Target, date: &str) -> Result<String> {
        let template = Template::load(&target.template)?;
        template.substitute(&self.placeholders(target, date))
    }

    fn create_asset_dir(&self) -> Result<()> {
        let dir = self.work_dir.join(ASSET_DIR);
        if !dir.exists() {
            log::info!("Creating `{}`", dir.display());
            fs::create_dir(&dir).map_err(|err| Error::WriteFile(dir, err))?;
        }
        Ok(())
    }

    /// check for overwrites, ask if needed, then write every enabled artifact
    pub fn run<C: Confirm, W: Write>(&self, confirm: &mut C, out: &mut W) -> Result<Outcome> {
        let targets = self.targets();

        let mut safe = true;
        for target in targets.iter().filter(|t| t.path.exists()) {
            writeln!(out, "{} exists", target.relative.display())?;
            safe = false;
        }
        if !safe && !confirm.confirm("Some file exists, run anyway?")? {
            writeln!(out, "Abort.")?;
            return Ok(Outcome::Aborted);
        }

        // a broken template stops the run before anything is written
        let date = today();
        let rendered = targets
            .into_iter()
            .map(|target| self.render(&target, &date).map(|contents| (contents, target)))
            .collect::<Result<Vec<_>>>()?;

        if self.config.asset {
            self.create_asset_dir()?;
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (contents, target) in rendered {
            log::info!("Writing `{}`", target.path.display());
            fs::write(&target.path, contents)
                .map_err(|err| Error::WriteFile(target.path.clone(), err))?;
            written.push(target.path);
        }

        writeln!(out, "Finished.")?;
        Ok(Outcome::Written(written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Author, DISABLED};
    use tempfile::TempDir;

    fn scaffolder(dir: &TempDir) -> Scaffolder {
        let author = Author {
            name: "Ann".into(),
            email: "ann@example.com".into(),
        };
        Scaffolder::new(dir.path(), Config::new(author, "/no/templates")).unwrap()
    }

    #[test]
    fn rejects_missing_work_dir() {
        let dir = TempDir::new().unwrap();
        let config = scaffolder(&dir).config().clone();
        let err = Scaffolder::new(dir.path().join("nope"), config).unwrap_err();
        assert!(matches!(err, Error::InvalidWorkDir(_)));
    }

    #[test]
    fn rejects_file_as_work_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        let config = scaffolder(&dir).config().clone();
        assert!(Scaffolder::new(&file, config).is_err());
    }

    #[test]
    fn targets_without_assets() {
        let dir = TempDir::new().unwrap();
        let mut scaffolder = scaffolder(&dir);
        scaffolder
            .config_mut()
            .configure("home", false, "style", "script");
        let relative: Vec<_> = scaffolder
            .targets()
            .iter()
            .map(|t| t.relative().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("home.html"),
                PathBuf::from("style.css"),
                PathBuf::from("script.js")
            ]
        );
    }

    #[test]
    fn targets_with_assets_skip_disabled() {
        let dir = TempDir::new().unwrap();
        let mut scaffolder = scaffolder(&dir);
        scaffolder.config_mut().configure("home", true, DISABLED, "app");
        let targets = scaffolder.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path(), dir.path().join("home.html"));
        assert_eq!(targets[1].artifact(), Artifact::Js);
        assert_eq!(targets[1].path(), dir.path().join(ASSET_DIR).join("app.js"));
        assert!(targets.iter().all(|t| t.artifact() != Artifact::Css));
    }

    #[test]
    fn html_placeholders_reference_assets() {
        let dir = TempDir::new().unwrap();
        let mut scaffolder = scaffolder(&dir);
        scaffolder.config_mut().configure("my.page", true, "style", DISABLED);
        let targets = scaffolder.targets();
        let values = scaffolder.placeholders(&targets[0], "Jan 05, 2024");
        assert_eq!(values["FNAME"], "my.page.html");
        assert_eq!(values["TITLE"], "my.page");
        assert_eq!(values["CSS_FILE"], "assets/style.css");
        assert_eq!(values["JS_FILE"], "");
        assert_eq!(values["DATE"], "Jan 05, 2024");
    }

    #[test]
    fn asset_placeholders_use_bare_name() {
        let dir = TempDir::new().unwrap();
        let mut scaffolder = scaffolder(&dir);
        scaffolder.config_mut().configure("home", true, "style", "script");
        let targets = scaffolder.targets();
        assert_eq!(targets[1].artifact(), Artifact::Css);
        let values = scaffolder.placeholders(&targets[1], "Jan 05, 2024");
        assert_eq!(values["FNAME"], "style.css");
        assert_eq!(values["AUTHOR"], "Ann");
        assert_eq!(values["EMAIL"], "ann@example.com");
        assert!(!values.contains_key("TITLE"));
    }

    #[test]
    fn missing_template_fails_at_render() {
        let dir = TempDir::new().unwrap();
        let scaffolder = scaffolder(&dir);
        let targets = scaffolder.targets();
        let err = scaffolder.render(&targets[0], "today").unwrap_err();
        assert!(matches!(err, Error::ReadTemplate(..)));
    }
}
