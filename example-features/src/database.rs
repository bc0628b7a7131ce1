use serde::Serialize;
use surveyor::{AnswerSet, Condition, Feature, FeatureDefinition, Question, Survey};

/// Supported database engines, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Postgres,
    Mysql,
    Sqlite,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 3] = [Self::Postgres, Self::Mysql, Self::Sqlite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Whether the engine runs as a separate server and needs a URL.
    pub fn is_networked(&self) -> bool {
        !matches!(self, Self::Sqlite)
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

/// A database connection, configured one question at a time so the URL is
/// only asked for engines that need one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Database;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseDefinition {
    pub kind: DatabaseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub migrations: bool,
}

impl Feature for Database {
    fn name(&self) -> &str {
        "database"
    }

    fn survey(&self) -> Option<Survey> {
        let networked = DatabaseKind::ALL
            .iter()
            .filter(|kind| kind.is_networked())
            .map(DatabaseKind::as_str);

        Some(
            Survey::new(vec![
                Question::select(
                    "kind",
                    "Database engine:",
                    DatabaseKind::ALL.map(|kind| kind.as_str()),
                ),
                Question::input("url", "Connection URL:")
                    .required()
                    .when(Condition::any_of("kind", networked)),
                Question::confirm("migrations", "Manage migrations?"),
            ])
            .one_at_a_time(),
        )
    }

    fn answers(&self, answers: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
        let kind = answers.get_string("kind")?;
        let kind = DatabaseKind::parse(kind)
            .ok_or_else(|| anyhow::anyhow!("unsupported database engine '{kind}'"))?;

        let url = match answers.get("url") {
            Some(_) => Some(answers.get_string("url")?.to_string()),
            None => None,
        };

        let definition = DatabaseDefinition {
            kind,
            url,
            migrations: answers.get_bool("migrations")?,
        };
        Ok(Some(FeatureDefinition::saved(serde_json::to_value(
            definition,
        )?)))
    }
}
