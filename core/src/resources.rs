/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::resource::{Field, FieldKind, Resource};
use super::types::*;

const FICHE: &str = "fiche_suivi_ouvrage";

impl Resource for EAnnee {
    const PATH: &'static str = "annees";
    const NAME: &'static str = "annee";
    const LABEL: &'static str = "Annee";

    fn id_column() -> CAnnee {
        CAnnee::Id
    }

    fn fields() -> Vec<Field<CAnnee>> {
        vec![
            Field::optional("id", FieldKind::Long, CAnnee::Id),
            Field::required("libelle", FieldKind::Text, CAnnee::Libelle),
            Field::reverse("previsionId", "prevision", "annee_id"),
        ]
    }
}

impl Resource for EDirectionRegionale {
    const PATH: &'static str = "direction-regionales";
    const NAME: &'static str = "directionRegionale";
    const LABEL: &'static str = "Direction regionale";

    fn id_column() -> CDirectionRegionale {
        CDirectionRegionale::Id
    }

    fn fields() -> Vec<Field<CDirectionRegionale>> {
        vec![
            Field::optional("id", FieldKind::Long, CDirectionRegionale::Id),
            Field::required("libelle", FieldKind::Text, CDirectionRegionale::Libelle),
            Field::required("responsable", FieldKind::Text, CDirectionRegionale::Responsable),
            Field::required(
                "numeroTelephone",
                FieldKind::Text,
                CDirectionRegionale::NumeroTelephone,
            ),
            Field::reverse(
                "centreRegroupementId",
                "centre_regroupement",
                "direction_regionale_id",
            ),
        ]
    }
}

impl Resource for ECentreRegroupement {
    const PATH: &'static str = "centre-regroupements";
    const NAME: &'static str = "centreRegroupement";
    const LABEL: &'static str = "Centre de regroupement";

    fn id_column() -> CCentreRegroupement {
        CCentreRegroupement::Id
    }

    fn fields() -> Vec<Field<CCentreRegroupement>> {
        vec![
            Field::optional("id", FieldKind::Long, CCentreRegroupement::Id),
            Field::required("libelle", FieldKind::Text, CCentreRegroupement::Libelle),
            Field::required("responsable", FieldKind::Text, CCentreRegroupement::Responsable),
            Field::required(
                "numeroTelephone",
                FieldKind::Text,
                CCentreRegroupement::NumeroTelephone,
            ),
            Field::relation(
                "directionRegionaleId",
                CCentreRegroupement::DirectionRegionaleId,
            ),
            Field::reverse("centreId", "centre", "centre_regroupement_id"),
        ]
    }
}

impl Resource for ECentre {
    const PATH: &'static str = "centres";
    const NAME: &'static str = "centre";
    const LABEL: &'static str = "Centre";

    fn id_column() -> CCentre {
        CCentre::Id
    }

    fn fields() -> Vec<Field<CCentre>> {
        vec![
            Field::optional("id", FieldKind::Long, CCentre::Id),
            Field::required("libelle", FieldKind::Text, CCentre::Libelle),
            Field::required("responsable", FieldKind::Text, CCentre::Responsable),
            Field::required("numeroTelephone", FieldKind::Text, CCentre::NumeroTelephone),
            Field::relation("centreRegroupementId", CCentre::CentreRegroupementId),
            Field::reverse("previsionId", "prevision", "centre_id"),
            Field::reverse("maconId", "macon", "centre_id"),
            Field::reverse("prefabricantId", "prefabricant", "centre_id"),
        ]
    }
}

/// Lookup tables share the same shape: a required label and the sheets
/// referencing them.
macro_rules! lookup_resource {
    ($entity:ty, $column:ty, $path:literal, $name:literal, $label:literal, $foreign_key:literal) => {
        impl Resource for $entity {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            const LABEL: &'static str = $label;

            fn id_column() -> $column {
                <$column>::Id
            }

            fn fields() -> Vec<Field<$column>> {
                vec![
                    Field::optional("id", FieldKind::Long, <$column>::Id),
                    Field::required("libelle", FieldKind::Text, <$column>::Libelle),
                    Field::reverse("ficheSuiviOuvrageId", FICHE, $foreign_key),
                ]
            }
        }
    };
}

lookup_resource!(
    ENatureOuvrage,
    CNatureOuvrage,
    "nature-ouvrages",
    "natureOuvrage",
    "Nature d'ouvrage",
    "nature_ouvrage_id"
);
lookup_resource!(
    ETypeHabitation,
    CTypeHabitation,
    "type-habitations",
    "typeHabitation",
    "Type d'habitation",
    "type_habitation_id"
);
lookup_resource!(
    ESourceApprovEp,
    CSourceApprovEp,
    "source-approv-eps",
    "sourceApprovEp",
    "Source d'approvisionnement",
    "source_approv_ep_id"
);
lookup_resource!(
    EModeEvacuationEauUsee,
    CModeEvacuationEauUsee,
    "mode-evacuation-eau-usees",
    "modeEvacuationEauUsee",
    "Mode d'evacuation des eaux usees",
    "mode_evacuation_eau_usee_id"
);
lookup_resource!(
    EModeEvacExcreta,
    CModeEvacExcreta,
    "mode-evac-excretas",
    "modeEvacExcreta",
    "Mode d'evacuation des excreta",
    "mode_evac_excreta_id"
);

impl Resource for EMacon {
    const PATH: &'static str = "macons";
    const NAME: &'static str = "macon";
    const LABEL: &'static str = "Macon";

    fn id_column() -> CMacon {
        CMacon::Id
    }

    fn fields() -> Vec<Field<CMacon>> {
        vec![
            Field::optional("id", FieldKind::Long, CMacon::Id),
            Field::required("prenom", FieldKind::Text, CMacon::Prenom),
            Field::required("nom", FieldKind::Text, CMacon::Nom),
            Field::required("telephone", FieldKind::Text, CMacon::Telephone),
            Field::relation("centreId", CMacon::CentreId),
            Field::reverse("ficheSuiviOuvrageId", FICHE, "macon_id"),
        ]
    }
}

impl Resource for EPrefabricant {
    const PATH: &'static str = "prefabricants";
    const NAME: &'static str = "prefabricant";
    const LABEL: &'static str = "Prefabricant";

    fn id_column() -> CPrefabricant {
        CPrefabricant::Id
    }

    fn fields() -> Vec<Field<CPrefabricant>> {
        vec![
            Field::optional("id", FieldKind::Long, CPrefabricant::Id),
            Field::required("nom", FieldKind::Text, CPrefabricant::Nom),
            Field::required("telephone", FieldKind::Text, CPrefabricant::Telephone),
            Field::relation("centreId", CPrefabricant::CentreId),
            Field::reverse("ficheSuiviOuvrageId", FICHE, "prefabricant_id"),
        ]
    }
}

impl Resource for EPrevision {
    const PATH: &'static str = "previsions";
    const NAME: &'static str = "prevision";
    const LABEL: &'static str = "Prevision";

    fn id_column() -> CPrevision {
        CPrevision::Id
    }

    fn fields() -> Vec<Field<CPrevision>> {
        vec![
            Field::optional("id", FieldKind::Long, CPrevision::Id),
            Field::required("nbLatrines", FieldKind::Integer, CPrevision::NbLatrines),
            Field::required("nbPuisards", FieldKind::Integer, CPrevision::NbPuisards),
            Field::required("nbPublic", FieldKind::Integer, CPrevision::NbPublic),
            Field::required("nbScolaire", FieldKind::Integer, CPrevision::NbScolaire),
            Field::relation("centreId", CPrevision::CentreId),
            Field::relation("anneeId", CPrevision::AnneeId),
            Field::reverse("ficheSuiviOuvrageId", FICHE, "prevision_id"),
        ]
    }
}

impl Resource for EFicheSuiviOuvrage {
    const PATH: &'static str = "fiche-suivi-ouvrages";
    const NAME: &'static str = "ficheSuiviOuvrage";
    const LABEL: &'static str = "Fiche de suivi";

    fn id_column() -> CFicheSuiviOuvrage {
        CFicheSuiviOuvrage::Id
    }

    fn fields() -> Vec<Field<CFicheSuiviOuvrage>> {
        use CFicheSuiviOuvrage as C;

        vec![
            Field::optional("id", FieldKind::Long, C::Id),
            Field::required("prenomBeneficiaire", FieldKind::Text, C::PrenomBeneficiaire),
            Field::required("nomBeneficiaire", FieldKind::Text, C::NomBeneficiaire),
            Field::required("telephone", FieldKind::Text, C::Telephone),
            Field::optional("adresse", FieldKind::Text, C::Adresse),
            Field::optional("longitude", FieldKind::Double, C::Longitude),
            Field::optional("latitude", FieldKind::Double, C::Latitude),
            Field::optional("dateRemiseDevis", FieldKind::Instant, C::DateRemiseDevis),
            Field::optional("dateDebutTravaux", FieldKind::Instant, C::DateDebutTravaux),
            Field::optional("dateFinTravaux", FieldKind::Instant, C::DateFinTravaux),
            Field::optional("coutMenage", FieldKind::Integer, C::CoutMenage),
            Field::optional("subvOnas", FieldKind::Integer, C::SubvOnas),
            Field::optional("nbUsagers", FieldKind::Integer, C::NbUsagers),
            Field::relation("natureOuvrageId", C::NatureOuvrageId),
            Field::relation("typeHabitationId", C::TypeHabitationId),
            Field::relation("sourceApprovEpId", C::SourceApprovEpId),
            Field::relation("modeEvacuationEauUseeId", C::ModeEvacuationEauUseeId),
            Field::relation("modeEvacExcretaId", C::ModeEvacExcretaId),
            Field::relation("maconId", C::MaconId),
            Field::relation("prefabricantId", C::PrefabricantId),
            Field::relation("previsionId", C::PrevisionId),
        ]
    }
}
