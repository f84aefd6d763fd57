/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod annee;
pub mod centre;
pub mod centre_regroupement;
pub mod direction_regionale;
pub mod fiche_suivi_ouvrage;
pub mod macon;
pub mod mode_evac_excreta;
pub mod mode_evacuation_eau_usee;
pub mod nature_ouvrage;
pub mod prefabricant;
pub mod prevision;
pub mod source_approv_ep;
pub mod type_habitation;
