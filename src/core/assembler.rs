use crate::catalog::CategoryProfile;
use crate::core::date::{extract_date, find_last_date};
use crate::core::location::LocationClassifier;
use crate::core::status::StatusSelector;
use crate::core::temporal::{TemporalAnnotator, YearWindow};
use crate::domain::model::{Classification, Entity, EntityStatus, Homeport, TextBlock};
use crate::domain::ports::LocationDirectory;
use crate::utils::error::Result;

impl Classification {
    /// The status date, or the status year when the sentence carries no day.
    pub fn display_date(&self) -> String {
        find_last_date(&self.status.status_text)
            .map(str::to_string)
            .unwrap_or_else(|| self.status.year.to_string())
    }
}

/// Text block → classification → per-entity record.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    annotator: TemporalAnnotator,
    selector: StatusSelector,
    classifier: LocationClassifier,
}

impl RecordAssembler {
    pub fn new(
        annotator: TemporalAnnotator,
        selector: StatusSelector,
        classifier: LocationClassifier,
    ) -> Self {
        Self {
            annotator,
            selector,
            classifier,
        }
    }

    pub fn from_profile(profile: &CategoryProfile, window: YearWindow) -> Result<Self> {
        Ok(Self::new(
            TemporalAnnotator::new(window)?,
            StatusSelector::new(&profile.activity_keywords, window),
            LocationClassifier::new(profile.ruleset.clone()),
        ))
    }

    pub fn classifier(&self) -> &LocationClassifier {
        &self.classifier
    }

    pub fn classify(&self, text: &TextBlock, homeport: &Homeport) -> Classification {
        let annotated = self.annotator.annotate(text);
        let status = self.selector.select(&annotated);
        let location = self.classifier.classify(&status.status_text, homeport);
        let date = extract_date(&status.status_text);

        Classification {
            location,
            date,
            status,
        }
    }

    pub fn assemble(
        &self,
        entity: &Entity,
        text: &TextBlock,
        directory: &dyn LocationDirectory,
    ) -> EntityStatus {
        let classification = self.classify(text, &entity.homeport);

        if !classification.status.is_found() {
            tracing::debug!("{}: no recent status, using homeport default", entity.id);
        }

        EntityStatus {
            id: entity.id.clone(),
            name: entity.name.clone(),
            class: entity.class.clone(),
            subtype: entity.subtype.clone(),
            location: classification.location,
            coordinate: directory.coordinate(classification.location),
            date: classification.display_date(),
            status: classification.status.status_text,
            source_url: entity.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, StaticDirectory};
    use crate::core::date::DATE_UNSPECIFIED;
    use crate::domain::location::LocationTag;
    use crate::domain::model::{YearTag, NO_RECENT_STATUS};

    fn assembler() -> RecordAssembler {
        RecordAssembler::from_profile(&Category::Fleet.profile(), YearWindow::new(2025)).unwrap()
    }

    #[test]
    fn test_end_to_end_bahrain() {
        let text = TextBlock::new("2025\nJanuary transited Red Sea.\nFebruary arrived Bahrain.\n");
        let result = assembler().classify(&text, &Homeport::Other("CENTCOM".to_string()));

        assert_eq!(result.status.year, YearTag::Known(2025));
        assert_eq!(result.status.status_text, "February arrived Bahrain.");
        assert_eq!(result.location, LocationTag::Bahrain);
        assert_eq!(result.date, DATE_UNSPECIFIED);
        assert_eq!(result.display_date(), "2025");
    }

    #[test]
    fn test_end_to_end_empty_block() {
        let result = assembler().classify(&TextBlock::new(""), &Homeport::Pacific);

        assert_eq!(result.status.year, YearTag::Unknown);
        assert_eq!(result.status.status_text, NO_RECENT_STATUS);
        assert_eq!(result.location, LocationTag::PacificOcean);
        assert_eq!(result.display_date(), "Unknown");
    }

    #[test]
    fn test_assemble_builds_record() {
        let entity = Entity {
            id: "CVN73".to_string(),
            name: "USS George Washington".to_string(),
            class: "Nimitz".to_string(),
            subtype: Some("CVN".to_string()),
            homeport: Homeport::Westpac,
            url: "http://uscarriers.net/cvn73history.htm".to_string(),
        };
        let text = TextBlock::new("2025\nOn Oct. 14, moored at Yokosuka after patrol.");
        let record = assembler().assemble(&entity, &text, &StaticDirectory);

        assert_eq!(record.id, "CVN73");
        assert_eq!(record.location, LocationTag::Yokosuka);
        assert_eq!(record.date, "Oct. 14");
        assert_eq!(record.coordinate, StaticDirectory.coordinate(LocationTag::Yokosuka));
        assert_eq!(record.source_url, entity.url);
    }
}
