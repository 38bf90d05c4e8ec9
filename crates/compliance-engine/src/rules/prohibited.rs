use transfer_types::{Declaration, Declarations, Finding, Severity};

/// Check the question 21 declarations for prohibiting answers
///
/// Each declaration stands alone: a prohibiting answer yields one finding that
/// references only that declaration's field. Unanswered declarations and the
/// nonimmigrant visa question (see `visa`) produce nothing here.
pub fn check_prohibiting_declarations(declarations: &Declarations) -> Vec<Finding> {
    let mut findings = Vec::new();

    for declaration in Declaration::ALL {
        let Some(prohibiting) = declaration.prohibiting_answer() else {
            continue;
        };

        if declarations.answer(declaration) == Some(prohibiting) {
            findings.push(Finding::new(
                &format!("Q{}", declaration.question()),
                Severity::Critical,
                prohibition_message(declaration),
                [declaration.field()],
            ));
        }
    }

    findings
}

fn prohibition_message(declaration: Declaration) -> String {
    match declaration {
        Declaration::ActualTransfereeBuyer => {
            "Transferee indicated they are NOT the actual transferee/buyer (Q21.a). This prohibits the transaction.".to_string()
        }
        _ => format!(
            "Transferee answered 'Yes' to Q{} ({}). This is prohibited.",
            declaration.question(),
            short_description(declaration)
        ),
    }
}

fn short_description(declaration: Declaration) -> &'static str {
    match declaration {
        Declaration::ActualTransfereeBuyer => "Actual transferee/buyer",
        Declaration::WillDisposeToFelony => "Intends to dispose for a felony",
        Declaration::UnderIndictment => "Under indictment",
        Declaration::EverConvictedFelony => "Convicted of a felony",
        Declaration::FugitiveFromJustice => "Fugitive from justice",
        Declaration::UnlawfulUserOfControlledSubstance => "Unlawful user of a controlled substance",
        Declaration::AdjudicatedMentallyDefective => "Adjudicated mentally defective or committed",
        Declaration::DishonorableDischarge => "Dishonorable discharge",
        Declaration::SubjectToRestrainingOrder => "Subject to a restraining order",
        Declaration::ConvictedMisdemeanorDomesticViolence => {
            "Misdemeanor crime of domestic violence"
        }
        Declaration::RenouncedUsCitizenship => "Renounced U.S. citizenship",
        Declaration::AlienIllegally => "Illegally or unlawfully in the United States",
        Declaration::NonImmigrantVisa => "Nonimmigrant visa",
        Declaration::WillDisposeToProhibitedPerson => "Will dispose to a prohibited person",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use transfer_types::Field;

    fn prohibiting() -> impl Iterator<Item = (Declaration, bool)> {
        Declaration::ALL
            .into_iter()
            .filter_map(|d| d.prohibiting_answer().map(|answer| (d, answer)))
    }

    #[test]
    fn test_thirteen_declarations_have_a_prohibiting_answer() {
        assert_eq!(prohibiting().count(), 13);
    }

    #[test]
    fn test_all_clear_produces_nothing() {
        assert!(check_prohibiting_declarations(&Declarations::all_clear()).is_empty());
    }

    #[test]
    fn test_unanswered_produces_nothing() {
        assert!(check_prohibiting_declarations(&Declarations::default()).is_empty());
    }

    #[test]
    fn test_each_prohibiting_answer_yields_one_isolated_finding() {
        for (declaration, answer) in prohibiting() {
            let mut declarations = Declarations::all_clear();
            declarations.set(declaration, Some(answer));

            let findings = check_prohibiting_declarations(&declarations);
            assert_eq!(findings.len(), 1, "{:?}", declaration);
            assert!(findings[0].references_only(declaration.field()));
            assert_eq!(findings[0].severity, Severity::Critical);
            assert_eq!(findings[0].rule_code, format!("Q{}", declaration.question()));
        }
    }

    #[test]
    fn test_actual_buyer_prohibits_on_no() {
        let mut declarations = Declarations::all_clear();
        declarations.is_actual_transferee_buyer = Some(false);

        let findings = check_prohibiting_declarations(&declarations);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].references_only(Field::IsActualTransfereeBuyer));
        assert!(findings[0].message.contains("NOT the actual"));
    }

    #[test]
    fn test_visa_yes_is_not_prohibiting_here() {
        let mut declarations = Declarations::all_clear();
        declarations.non_immigrant_visa = Some(true);
        assert!(check_prohibiting_declarations(&declarations).is_empty());
    }

    #[test]
    fn test_every_prohibiting_answer_at_once() {
        let mut declarations = Declarations::all_clear();
        for (declaration, answer) in prohibiting() {
            declarations.set(declaration, Some(answer));
        }

        let findings = check_prohibiting_declarations(&declarations);
        assert_eq!(findings.len(), 13);
        assert_eq!(findings[0].rule_code, "Q21.a");
        assert_eq!(findings[12].rule_code, "Q21.n");
    }
}
