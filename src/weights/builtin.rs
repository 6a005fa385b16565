//! Built-in bilingual question bank.
//!
//! Every question swings each dimension it touches symmetrically, so the
//! `(raw + max) / (2 * max)` normalization is exact for this bank.

use super::question::{ChoiceOption, Question};
use crate::model::{Dimension, LocalizedText};

use Dimension::{Confidence, Habits, Inclusion, Resilience};

const fn t(en: &'static str, es: &'static str) -> LocalizedText {
    LocalizedText::new(en, es)
}

pub(crate) fn builtin_questions() -> Vec<Question> {
    vec![
        Question::choice(
            "q1",
            t(
                "How often do you check where your money goes?",
                "¿Con qué frecuencia revisas en qué se va tu dinero?",
            ),
            vec![
                ChoiceOption::new(t("Every week", "Cada semana"), [(Habits, 2)]),
                ChoiceOption::new(t("About once a month", "Más o menos una vez al mes"), [(Habits, 1)]),
                ChoiceOption::new(
                    t("Only when something goes wrong", "Solo cuando algo sale mal"),
                    [(Habits, -1)],
                ),
                ChoiceOption::new(t("Never", "Nunca"), [(Habits, -2)]),
            ],
        ),
        Question::choice(
            "q2",
            t(
                "In the last 12 months, how were your bills paid?",
                "En los últimos 12 meses, ¿cómo pagaste tus cuentas?",
            ),
            vec![
                ChoiceOption::new(
                    t("Always on time", "Siempre a tiempo"),
                    [(Habits, 2), (Resilience, 1)],
                ),
                ChoiceOption::new(t("Mostly on time", "Casi siempre a tiempo"), [(Habits, 1)]),
                ChoiceOption::new(t("Sometimes late", "A veces tarde"), [(Habits, -1)]),
                ChoiceOption::new(
                    t("Often late or missed", "Seguido tarde o sin pagar"),
                    [(Habits, -2), (Resilience, -1)],
                ),
            ],
        ),
        Question::choice(
            "q3",
            t(
                "If your income stopped today, how long could you cover your expenses?",
                "Si tus ingresos se detuvieran hoy, ¿cuánto tiempo podrías cubrir tus gastos?",
            ),
            vec![
                ChoiceOption::new(t("Six months or more", "Seis meses o más"), [(Resilience, 2)]),
                ChoiceOption::new(t("Three to six months", "De tres a seis meses"), [(Resilience, 1)]),
                ChoiceOption::new(t("One to three months", "De uno a tres meses"), [(Resilience, -1)]),
                ChoiceOption::new(t("Less than a month", "Menos de un mes"), [(Resilience, -2)]),
            ],
        ),
        Question::choice(
            "q4",
            t(
                "How would you handle a surprise $500 expense?",
                "¿Cómo cubrirías un gasto inesperado de $500?",
            ),
            vec![
                ChoiceOption::new(
                    t("Pay it from savings", "Lo pago con mis ahorros"),
                    [(Resilience, 2), (Confidence, 1)],
                ),
                ChoiceOption::new(
                    t("Cut back on other spending", "Recorto otros gastos"),
                    [(Resilience, 1)],
                ),
                ChoiceOption::new(
                    t("Borrow from family or friends", "Pido prestado a familia o amigos"),
                    [(Resilience, -1)],
                ),
                ChoiceOption::new(
                    t("Credit card or payday loan", "Tarjeta de crédito o préstamo rápido"),
                    [(Resilience, -2), (Confidence, -1)],
                ),
            ],
        ),
        Question::slider(
            "q5",
            t(
                "How confident do you feel making money decisions?",
                "¿Qué tan seguro te sientes al tomar decisiones de dinero?",
            ),
            vec![Confidence],
        ),
        Question::choice(
            "q6",
            t(
                "Do you know the interest rate on your debts?",
                "¿Conoces la tasa de interés de tus deudas?",
            ),
            vec![
                ChoiceOption::new(t("Yes, exactly", "Sí, con exactitud"), [(Confidence, 2)]),
                ChoiceOption::new(t("Roughly", "Más o menos"), [(Confidence, 1)]),
                ChoiceOption::new(t("Not really", "En realidad no"), [(Confidence, -1)]),
                ChoiceOption::new(t("No idea", "Ni idea"), [(Confidence, -2)]),
            ],
        ),
        Question::choice(
            "q7",
            t(
                "Which accounts do you have at a bank or credit union?",
                "¿Qué cuentas tienes en un banco o cooperativa de crédito?",
            ),
            vec![
                ChoiceOption::new(t("Checking and savings", "Cheques y ahorros"), [(Inclusion, 2)]),
                ChoiceOption::new(t("Just one account", "Solo una cuenta"), [(Inclusion, 1)]),
                ChoiceOption::new(
                    t("Only a prepaid card", "Solo una tarjeta prepagada"),
                    [(Inclusion, -1)],
                ),
                ChoiceOption::new(t("None", "Ninguna"), [(Inclusion, -2)]),
            ],
        ),
        Question::slider(
            "q8",
            t(
                "How much do you trust banks to treat you fairly?",
                "¿Cuánto confías en que los bancos te traten con justicia?",
            ),
            vec![Inclusion],
        ),
        Question::slider(
            "q9",
            t(
                "How often do you set aside part of each paycheck?",
                "¿Con qué frecuencia apartas una parte de cada pago?",
            ),
            vec![Habits, Resilience],
        ),
        Question::choice(
            "q10",
            t(
                "Have you been turned away or charged extra fees by a financial service?",
                "¿Algún servicio financiero te ha rechazado o cobrado cargos extra?",
            ),
            vec![
                ChoiceOption::new(t("Never", "Nunca"), [(Inclusion, 2), (Confidence, 1)]),
                ChoiceOption::new(t("Once", "Una vez"), [(Inclusion, 1)]),
                ChoiceOption::new(t("A few times", "Algunas veces"), [(Inclusion, -1)]),
                ChoiceOption::new(
                    t("Often", "Con frecuencia"),
                    [(Inclusion, -2), (Confidence, -1)],
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_symmetric_per_dimension() {
        for question in builtin_questions() {
            for dimension in Dimension::ALL {
                if let Some((low, high)) = question.weight_range(dimension) {
                    assert_eq!(
                        low.unsigned_abs(),
                        high.unsigned_abs(),
                        "{} is asymmetric on {dimension}",
                        question.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_worst_q1_option_is_minus_two_habits() {
        let questions = builtin_questions();
        let q1 = &questions[0];
        assert_eq!(q1.id, "q1");
        let worst = q1.selection_weights(3).unwrap();
        assert_eq!(worst[Habits], -2);
        assert_eq!(q1.cap(Habits), 2);
        for dimension in [Confidence, Resilience, Inclusion] {
            assert_eq!(q1.cap(dimension), 0);
        }
    }
}
