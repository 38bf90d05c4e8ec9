//! ATF Form 4473 transfer record
//!
//! The record is assembled by the storage/mapping layer and handed to the
//! compliance engine fully populated. Nothing in this crate mutates it after
//! construction; evaluation only ever borrows it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::FieldName;

/// One firearm line from Section A (questions 1-5)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirearmLine {
    pub manufacturer_or_pmf: String,
    pub model: Option<String>,
    pub serial_number: String,
    /// Free text as written on the form: "pistol", "rifle", "receiver", ...
    pub firearm_type: String,
    pub caliber_or_gauge: String,
}

/// Question 18.b. At least one box must be checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceIndicators {
    pub american_indian_or_alaska_native: bool,
    pub asian: bool,
    pub black_or_african_american: bool,
    pub native_hawaiian_or_pacific_islander: bool,
    pub white: bool,
}

impl RaceIndicators {
    pub fn any_selected(&self) -> bool {
        self.american_indian_or_alaska_native
            || self.asian
            || self.black_or_african_american
            || self.native_hawaiian_or_pacific_islander
            || self.white
    }
}

/// The question 21 yes/no declarations (the Q-set). `None` is unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarations {
    pub is_actual_transferee_buyer: Option<bool>,
    pub will_dispose_to_felony: Option<bool>,
    pub under_indictment: Option<bool>,
    pub ever_convicted_felony: Option<bool>,
    pub fugitive_from_justice: Option<bool>,
    pub unlawful_user_of_controlled_substance: Option<bool>,
    pub adjudicated_mentally_defective: Option<bool>,
    pub dishonorable_discharge: Option<bool>,
    pub subject_to_restraining_order: Option<bool>,
    pub convicted_misdemeanor_domestic_violence: Option<bool>,
    pub renounced_us_citizenship: Option<bool>,
    pub alien_illegally: Option<bool>,
    pub non_immigrant_visa: Option<bool>,
    pub will_dispose_to_prohibited_person: Option<bool>,
}

/// Names one question 21 declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Declaration {
    ActualTransfereeBuyer,
    WillDisposeToFelony,
    UnderIndictment,
    EverConvictedFelony,
    FugitiveFromJustice,
    UnlawfulUserOfControlledSubstance,
    AdjudicatedMentallyDefective,
    DishonorableDischarge,
    SubjectToRestrainingOrder,
    ConvictedMisdemeanorDomesticViolence,
    RenouncedUsCitizenship,
    AlienIllegally,
    NonImmigrantVisa,
    WillDisposeToProhibitedPerson,
}

impl Declaration {
    /// All 14 declarations in form order
    pub const ALL: [Declaration; 14] = [
        Declaration::ActualTransfereeBuyer,
        Declaration::WillDisposeToFelony,
        Declaration::UnderIndictment,
        Declaration::EverConvictedFelony,
        Declaration::FugitiveFromJustice,
        Declaration::UnlawfulUserOfControlledSubstance,
        Declaration::AdjudicatedMentallyDefective,
        Declaration::DishonorableDischarge,
        Declaration::SubjectToRestrainingOrder,
        Declaration::ConvictedMisdemeanorDomesticViolence,
        Declaration::RenouncedUsCitizenship,
        Declaration::AlienIllegally,
        Declaration::NonImmigrantVisa,
        Declaration::WillDisposeToProhibitedPerson,
    ];

    /// Form question number, e.g. "21.c"
    pub fn question(self) -> &'static str {
        match self {
            Declaration::ActualTransfereeBuyer => "21.a",
            Declaration::WillDisposeToFelony => "21.b",
            Declaration::UnderIndictment => "21.c",
            Declaration::EverConvictedFelony => "21.d",
            Declaration::FugitiveFromJustice => "21.e",
            Declaration::UnlawfulUserOfControlledSubstance => "21.f",
            Declaration::AdjudicatedMentallyDefective => "21.g",
            Declaration::DishonorableDischarge => "21.h",
            Declaration::SubjectToRestrainingOrder => "21.i",
            Declaration::ConvictedMisdemeanorDomesticViolence => "21.j",
            Declaration::RenouncedUsCitizenship => "21.k",
            Declaration::AlienIllegally => "21.l",
            Declaration::NonImmigrantVisa => "21.m.1",
            Declaration::WillDisposeToProhibitedPerson => "21.n",
        }
    }

    /// The answer that prohibits the transfer on its own.
    ///
    /// `None` for the nonimmigrant visa question: a "yes" there only matters
    /// together with the 21.m.2 exception answer.
    pub fn prohibiting_answer(self) -> Option<bool> {
        match self {
            Declaration::ActualTransfereeBuyer => Some(false),
            Declaration::NonImmigrantVisa => None,
            _ => Some(true),
        }
    }

    pub fn field(self) -> Field {
        match self {
            Declaration::ActualTransfereeBuyer => Field::IsActualTransfereeBuyer,
            Declaration::WillDisposeToFelony => Field::WillDisposeToFelony,
            Declaration::UnderIndictment => Field::UnderIndictment,
            Declaration::EverConvictedFelony => Field::EverConvictedFelony,
            Declaration::FugitiveFromJustice => Field::FugitiveFromJustice,
            Declaration::UnlawfulUserOfControlledSubstance => {
                Field::UnlawfulUserOfControlledSubstance
            }
            Declaration::AdjudicatedMentallyDefective => Field::AdjudicatedMentallyDefective,
            Declaration::DishonorableDischarge => Field::DishonorableDischarge,
            Declaration::SubjectToRestrainingOrder => Field::SubjectToRestrainingOrder,
            Declaration::ConvictedMisdemeanorDomesticViolence => {
                Field::ConvictedMisdemeanorDomesticViolence
            }
            Declaration::RenouncedUsCitizenship => Field::RenouncedUsCitizenship,
            Declaration::AlienIllegally => Field::AlienIllegally,
            Declaration::NonImmigrantVisa => Field::NonImmigrantVisa,
            Declaration::WillDisposeToProhibitedPerson => Field::WillDisposeToProhibitedPerson,
        }
    }
}

impl Declarations {
    pub fn answer(&self, declaration: Declaration) -> Option<bool> {
        match declaration {
            Declaration::ActualTransfereeBuyer => self.is_actual_transferee_buyer,
            Declaration::WillDisposeToFelony => self.will_dispose_to_felony,
            Declaration::UnderIndictment => self.under_indictment,
            Declaration::EverConvictedFelony => self.ever_convicted_felony,
            Declaration::FugitiveFromJustice => self.fugitive_from_justice,
            Declaration::UnlawfulUserOfControlledSubstance => {
                self.unlawful_user_of_controlled_substance
            }
            Declaration::AdjudicatedMentallyDefective => self.adjudicated_mentally_defective,
            Declaration::DishonorableDischarge => self.dishonorable_discharge,
            Declaration::SubjectToRestrainingOrder => self.subject_to_restraining_order,
            Declaration::ConvictedMisdemeanorDomesticViolence => {
                self.convicted_misdemeanor_domestic_violence
            }
            Declaration::RenouncedUsCitizenship => self.renounced_us_citizenship,
            Declaration::AlienIllegally => self.alien_illegally,
            Declaration::NonImmigrantVisa => self.non_immigrant_visa,
            Declaration::WillDisposeToProhibitedPerson => self.will_dispose_to_prohibited_person,
        }
    }

    pub fn set(&mut self, declaration: Declaration, answer: Option<bool>) {
        let slot = match declaration {
            Declaration::ActualTransfereeBuyer => &mut self.is_actual_transferee_buyer,
            Declaration::WillDisposeToFelony => &mut self.will_dispose_to_felony,
            Declaration::UnderIndictment => &mut self.under_indictment,
            Declaration::EverConvictedFelony => &mut self.ever_convicted_felony,
            Declaration::FugitiveFromJustice => &mut self.fugitive_from_justice,
            Declaration::UnlawfulUserOfControlledSubstance => {
                &mut self.unlawful_user_of_controlled_substance
            }
            Declaration::AdjudicatedMentallyDefective => &mut self.adjudicated_mentally_defective,
            Declaration::DishonorableDischarge => &mut self.dishonorable_discharge,
            Declaration::SubjectToRestrainingOrder => &mut self.subject_to_restraining_order,
            Declaration::ConvictedMisdemeanorDomesticViolence => {
                &mut self.convicted_misdemeanor_domestic_violence
            }
            Declaration::RenouncedUsCitizenship => &mut self.renounced_us_citizenship,
            Declaration::AlienIllegally => &mut self.alien_illegally,
            Declaration::NonImmigrantVisa => &mut self.non_immigrant_visa,
            Declaration::WillDisposeToProhibitedPerson => {
                &mut self.will_dispose_to_prohibited_person
            }
        };
        *slot = answer;
    }

    /// Every declaration answered in its non-prohibiting direction.
    /// The visa question is answered "no".
    pub fn all_clear() -> Self {
        let mut declarations = Self::default();
        for declaration in Declaration::ALL {
            let clear = match declaration.prohibiting_answer() {
                Some(prohibiting) => !prohibiting,
                None => false,
            };
            declarations.set(declaration, Some(clear));
        }
        declarations
    }
}

/// Initial NICS response recorded in question 27.c
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NicsOutcome {
    /// No response has been recorded
    #[default]
    NotChecked,
    Proceed,
    Delayed,
    Denied,
    Cancelled,
    Overturned,
}

impl NicsOutcome {
    pub fn prohibits_transfer(self) -> bool {
        matches!(self, NicsOutcome::Denied | NicsOutcome::Cancelled)
    }
}

/// Basis asserted for skipping a live NICS check (questions 28 and 29)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExemptionClaim {
    None,
    NfaPriorCheck,
    StatePermit,
}

impl ExemptionClaim {
    /// Returns `None` when both exemptions are asserted, which is never a
    /// single valid claim.
    pub fn from_flags(nfa_prior_check: bool, state_permit: bool) -> Option<Self> {
        match (nfa_prior_check, state_permit) {
            (false, false) => Some(ExemptionClaim::None),
            (true, false) => Some(ExemptionClaim::NfaPriorCheck),
            (false, true) => Some(ExemptionClaim::StatePermit),
            (true, true) => None,
        }
    }
}

/// The full Form 4473 record, Sections A through E
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: Option<Uuid>,
    pub transferors_transaction_number: Option<String>,

    // Section A
    /// `None` means the mapping layer never supplied the collection.
    pub firearm_lines: Option<Vec<FirearmLine>>,
    pub total_number_of_firearms: String,
    pub is_pawn_redemption: bool,
    pub pawn_redemption_line_numbers: Option<String>,
    pub is_private_party_transfer: bool,

    // Section B
    pub transferee_last_name: String,
    pub transferee_first_name: String,
    pub transferee_middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub is_hispanic_or_latino: Option<bool>,
    pub race: RaceIndicators,
    pub country_of_citizenship: String,
    pub declarations: Declarations,
    pub non_immigrant_visa_exception: Option<bool>,
    pub transferee_signature: String,
    pub certification_date: NaiveDate,

    // Question 24
    pub category_handgun: bool,
    pub category_long_gun: bool,
    pub category_other: bool,

    // Question 26
    pub identification_type: String,
    pub identification_number: String,
    pub identification_exp_date: NaiveDate,
    pub supplemental_govt_doc: Option<String>,
    pub non_immigrant_exception_documentation: Option<String>,

    // Section C
    pub nics_check_initiated_date: Option<NaiveDate>,
    pub nics_or_state_transaction_number: Option<String>,
    pub initial_nics_response: NicsOutcome,
    pub nics_delayed_eligible_date: Option<NaiveDate>,
    pub is_nfa_background_check_already: bool,
    pub is_state_permit_exemption: bool,
    pub state_permit_type: Option<String>,
    pub state_permit_issue_date: Option<NaiveDate>,
    pub state_permit_expiration_date: Option<NaiveDate>,
    pub state_permit_number: Option<String>,

    // Section D
    pub transferee_recert_signature: Option<String>,
    pub transferee_recert_date: Option<NaiveDate>,

    // Section E
    pub licensee_use_remarks: Option<String>,
    pub seller_trade_name: Option<String>,
    pub seller_street_address: Option<String>,
    pub seller_city_state_zip: Option<String>,
    pub seller_ffl_number: Option<String>,
    pub transferor_name: Option<String>,
    pub transferor_signature: Option<String>,
    pub transfer_date: Option<NaiveDate>,
}

impl TransferRecord {
    /// Exemption asserted by the record, or `None` when both are claimed.
    pub fn exemption_claim(&self) -> Option<ExemptionClaim> {
        ExemptionClaim::from_flags(
            self.is_nfa_background_check_already,
            self.is_state_permit_exemption,
        )
    }
}

/// Absent, empty, or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Field references used in transfer-record findings.
///
/// Names match the form-field names the mapping layer uses, so a caller can
/// route a finding straight back to the input that needs correcting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirearmLines,
    PawnRedemptionLineNumbers,
    DateOfBirth,
    RaceAmericanIndianOrAlaskaNative,
    RaceAsian,
    RaceBlackOrAfricanAmerican,
    RaceNativeHawaiianOrPacificIslander,
    RaceWhite,
    IsActualTransfereeBuyer,
    WillDisposeToFelony,
    UnderIndictment,
    EverConvictedFelony,
    FugitiveFromJustice,
    UnlawfulUserOfControlledSubstance,
    AdjudicatedMentallyDefective,
    DishonorableDischarge,
    SubjectToRestrainingOrder,
    ConvictedMisdemeanorDomesticViolence,
    RenouncedUsCitizenship,
    AlienIllegally,
    NonImmigrantVisa,
    NonImmigrantVisaException,
    WillDisposeToProhibitedPerson,
    CertificationDate,
    IdentificationExpDate,
    NonImmigrantExceptionDocumentation,
    NicsCheckInitiatedDate,
    InitialNicsResponse,
    NicsDelayedEligibleDate,
    IsNfaBackgroundCheckAlready,
    IsStatePermitExemption,
    StatePermitType,
    StatePermitExpirationDate,
    TransfereeRecertSignature,
    TransfereeRecertDate,
    SellerTradeName,
    SellerStreetAddress,
    SellerCityStateZip,
    SellerFflNumber,
    TransferorName,
    TransferorSignature,
    TransferDate,
}

impl Field {
    pub const RACE: [Field; 5] = [
        Field::RaceAmericanIndianOrAlaskaNative,
        Field::RaceAsian,
        Field::RaceBlackOrAfricanAmerican,
        Field::RaceNativeHawaiianOrPacificIslander,
        Field::RaceWhite,
    ];
}

impl FieldName for Field {
    fn name(&self) -> &'static str {
        match self {
            Field::FirearmLines => "FirearmLines",
            Field::PawnRedemptionLineNumbers => "PawnRedemptionLineNumbers",
            Field::DateOfBirth => "DateOfBirth",
            Field::RaceAmericanIndianOrAlaskaNative => "RaceAmericanIndianOrAlaskaNative",
            Field::RaceAsian => "RaceAsian",
            Field::RaceBlackOrAfricanAmerican => "RaceBlackOrAfricanAmerican",
            Field::RaceNativeHawaiianOrPacificIslander => "RaceNativeHawaiianOrPacificIslander",
            Field::RaceWhite => "RaceWhite",
            Field::IsActualTransfereeBuyer => "IsActualTransfereeBuyer",
            Field::WillDisposeToFelony => "WillDisposeToFelony",
            Field::UnderIndictment => "UnderIndictment",
            Field::EverConvictedFelony => "EverConvictedFelony",
            Field::FugitiveFromJustice => "FugitiveFromJustice",
            Field::UnlawfulUserOfControlledSubstance => "UnlawfulUserOfControlledSubstance",
            Field::AdjudicatedMentallyDefective => "AdjudicatedMentallyDefective",
            Field::DishonorableDischarge => "DishonorableDischarge",
            Field::SubjectToRestrainingOrder => "SubjectToRestrainingOrder",
            Field::ConvictedMisdemeanorDomesticViolence => "ConvictedMisdemeanorDomesticViolence",
            Field::RenouncedUsCitizenship => "RenouncedUSCitizenship",
            Field::AlienIllegally => "AlienIllegally",
            Field::NonImmigrantVisa => "NonImmigrantVisa",
            Field::NonImmigrantVisaException => "NonImmigrantVisaException",
            Field::WillDisposeToProhibitedPerson => "WillDisposeToProhibitedPerson",
            Field::CertificationDate => "CertificationDate",
            Field::IdentificationExpDate => "IdentificationExpDate",
            Field::NonImmigrantExceptionDocumentation => "NonImmigrantExceptionDocumentation",
            Field::NicsCheckInitiatedDate => "NicsCheckInitiatedDate",
            Field::InitialNicsResponse => "InitialNicsResponse",
            Field::NicsDelayedEligibleDate => "NicsDelayedEligibleDate",
            Field::IsNfaBackgroundCheckAlready => "IsNfaBackgroundCheckAlready",
            Field::IsStatePermitExemption => "IsStatePermitExemption",
            Field::StatePermitType => "StatePermitType",
            Field::StatePermitExpirationDate => "StatePermitExpirationDate",
            Field::TransfereeRecertSignature => "TransfereeRecertSignature",
            Field::TransfereeRecertDate => "TransfereeRecertDate",
            Field::SellerTradeName => "SellerTradeName",
            Field::SellerStreetAddress => "SellerStreetAddress",
            Field::SellerCityStateZip => "SellerCityStateZip",
            Field::SellerFflNumber => "SellerFFLNumber",
            Field::TransferorName => "TransferorName",
            Field::TransferorSignature => "TransferorSignature",
            Field::TransferDate => "TransferDate",
        }
    }
}
