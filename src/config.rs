use std::{
    env,
    path::{Path, PathBuf},
};

use figment::{
    providers::{Format, Json, Serialized},
    Figment, Metadata, Provider,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    utils::with_extension,
    AUTHOR_FILE, DISABLED, TEMPLATE_DIR,
};

/// overrides where the author config and templates are read from
pub const TEMPLATE_DIR_VAR: &str = "WEBINIT_TEMPLATE_DIR";

/// who the generated files are attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "Author")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Author {
    pub fn load<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingAuthorConfig(path.into()));
        }
        Ok(Figment::from(Json::file(path)).extract()?)
    }
}

/// runtime settings, overridable through the environment
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// where the author config and templates live, defaults to one next to the executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Settings {
    // the variable is taken verbatim, a directory named `2024` is still a path
    pub fn figment() -> Figment {
        let figment = Figment::from(Self::default());
        match env::var_os(TEMPLATE_DIR_VAR) {
            Some(dir) => figment.merge(Serialized::default("template_dir", PathBuf::from(dir))),
            None => figment,
        }
    }

    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn template_dir(&self) -> Result<PathBuf> {
        match &self.template_dir {
            Some(dir) => Ok(dir.clone()),
            None => install_dir().map(|dir| dir.join(TEMPLATE_DIR)),
        }
    }
}

impl Provider for Settings {
    fn metadata(&self) -> Metadata {
        Metadata::named("webinit settings")
    }
    fn data(
        &self,
    ) -> std::result::Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error>
    {
        Serialized::defaults(self).data()
    }
}

// symlinks resolved so an installed link still finds its templates
fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or(Error::NoInstallDir)
}

/// the three generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Html,
    Css,
    Js,
}

impl Artifact {
    /// render order
    pub const ALL: [Artifact; 3] = [Artifact::Html, Artifact::Css, Artifact::Js];

    pub fn extension(self) -> &'static str {
        match self {
            Artifact::Html => "html",
            Artifact::Css => "css",
            Artifact::Js => "js",
        }
    }

    pub fn template_name(self) -> &'static str {
        match self {
            Artifact::Html => "main.template.html",
            Artifact::Css => "style.template.css",
            Artifact::Js => "script.template.js",
        }
    }

    fn default_stem(self) -> &'static str {
        match self {
            Artifact::Html => "index",
            Artifact::Css => "style",
            Artifact::Js => "script",
        }
    }
}

/// output file name and template for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    pub fname: String,
    pub template: PathBuf,
}

impl ArtifactConfig {
    fn new(artifact: Artifact, template_dir: &Path, name: &str) -> Self {
        Self {
            fname: with_extension(name, artifact.extension()),
            template: template_dir.join(artifact.template_name()),
        }
    }
}

/// everything needed to scaffold a page
#[derive(Debug, Clone)]
pub struct Config {
    pub author: Author,
    pub template_dir: PathBuf,
    /// put css and js under the asset directory
    pub asset: bool,
    pub html: ArtifactConfig,
    /// `None` when css is turned off
    pub css: Option<ArtifactConfig>,
    /// `None` when js is turned off
    pub js: Option<ArtifactConfig>,
}

impl Config {
    pub fn new<T: Into<PathBuf>>(author: Author, template_dir: T) -> Self {
        let template_dir = template_dir.into();
        let default = |artifact: Artifact| {
            ArtifactConfig::new(artifact, &template_dir, artifact.default_stem())
        };
        Self {
            author,
            html: default(Artifact::Html),
            css: Some(default(Artifact::Css)),
            js: Some(default(Artifact::Js)),
            asset: false,
            template_dir,
        }
    }

    /// read the author identity out of the template directory
    pub fn load<T: Into<PathBuf>>(template_dir: T) -> Result<Self> {
        let template_dir = template_dir.into();
        let author = Author::load(template_dir.join(AUTHOR_FILE))?;
        Ok(Self::new(author, template_dir))
    }

    /// apply the command line choices, `None` as a css or js name drops that file
    pub fn configure(&mut self, name: &str, asset: bool, css: &str, js: &str) {
        self.html = ArtifactConfig::new(Artifact::Html, &self.template_dir, name);
        self.asset = asset;
        self.css = self.optional(Artifact::Css, css);
        self.js = self.optional(Artifact::Js, js);
    }

    fn optional(&self, artifact: Artifact, name: &str) -> Option<ArtifactConfig> {
        (name != DISABLED).then(|| ArtifactConfig::new(artifact, &self.template_dir, name))
    }

    pub fn artifact(&self, artifact: Artifact) -> Option<&ArtifactConfig> {
        match artifact {
            Artifact::Html => Some(&self.html),
            Artifact::Css => self.css.as_ref(),
            Artifact::Js => self.js.as_ref(),
        }
    }
}
