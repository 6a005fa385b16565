//! The action catalog: every step a plan can recommend.

use crate::error::{CatalogErrorKind, FinwellError, Result};
use crate::model::{Dimension, DimensionMap, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single recommended next action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub id: String,
    /// Dimension this step addresses, `None` for general steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    pub title: LocalizedText,
    pub detail: LocalizedText,
    /// Link to the lesson or tool behind the step
    pub href: String,
}

impl ActionStep {
    pub fn new(
        id: impl Into<String>,
        dimension: Option<Dimension>,
        title: LocalizedText,
        detail: LocalizedText,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            dimension,
            title,
            detail,
            href: href.into(),
        }
    }
}

/// Validated catalog with a focus and a growth step per dimension plus an
/// ordered list of general fallback steps.
///
/// Step ids may be referenced from several slots; a resilience focus step
/// can also sit in the fallback list.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    steps: Vec<ActionStep>,
    positions: HashMap<String, usize>,
    focus: DimensionMap<usize>,
    growth: DimensionMap<usize>,
    fallback: Vec<usize>,
}

impl ActionCatalog {
    #[must_use]
    pub fn builder() -> ActionCatalogBuilder {
        ActionCatalogBuilder::default()
    }

    /// The built-in bilingual catalog.
    pub fn builtin() -> Result<Self> {
        builtin_builder().build()
    }

    /// Look up a step by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ActionStep> {
        self.positions.get(id).map(|&i| &self.steps[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Step recommended when a dimension is weak.
    #[must_use]
    pub fn focus_step(&self, dimension: Dimension) -> &ActionStep {
        &self.steps[self.focus[dimension]]
    }

    /// Step recommended when a dimension is already adequate.
    #[must_use]
    pub fn growth_step(&self, dimension: Dimension) -> &ActionStep {
        &self.steps[self.growth[dimension]]
    }

    /// General steps in priority order.
    pub fn fallback_steps(&self) -> impl Iterator<Item = &ActionStep> {
        self.fallback.iter().map(|&i| &self.steps[i])
    }

    /// Every step, in insertion order.
    #[must_use]
    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builder for [`ActionCatalog`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ActionCatalogBuilder {
    steps: Vec<ActionStep>,
    focus: DimensionMap<Option<String>>,
    growth: DimensionMap<Option<String>>,
    fallback: Vec<String>,
}

impl ActionCatalogBuilder {
    pub fn step(mut self, step: ActionStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn focus(mut self, dimension: Dimension, id: impl Into<String>) -> Self {
        self.focus[dimension] = Some(id.into());
        self
    }

    pub fn growth(mut self, dimension: Dimension, id: impl Into<String>) -> Self {
        self.growth[dimension] = Some(id.into());
        self
    }

    /// Append a general step id to the fallback list.
    pub fn fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback.push(id.into());
        self
    }

    /// Validate and build the catalog.
    pub fn build(self) -> Result<ActionCatalog> {
        let mut positions = HashMap::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            if positions.insert(step.id.clone(), index).is_some() {
                return Err(FinwellError::catalog(
                    "building catalog",
                    CatalogErrorKind::DuplicateStep(step.id.clone()),
                ));
            }
        }

        let focus = resolve_slots(&self.focus, &positions, "focus")?;
        let growth = resolve_slots(&self.growth, &positions, "growth")?;

        if self.fallback.is_empty() {
            return Err(FinwellError::catalog(
                "building catalog",
                CatalogErrorKind::EmptyFallback,
            ));
        }
        let fallback = self
            .fallback
            .iter()
            .map(|id| lookup(&positions, id, "fallback list"))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Built action catalog with {} steps and {} fallbacks",
            self.steps.len(),
            fallback.len()
        );
        Ok(ActionCatalog {
            steps: self.steps,
            positions,
            focus,
            growth,
            fallback,
        })
    }
}

fn resolve_slots(
    slots: &DimensionMap<Option<String>>,
    positions: &HashMap<String, usize>,
    variant: &str,
) -> Result<DimensionMap<usize>> {
    let mut resolved = DimensionMap::default();
    for (dimension, id) in slots.iter() {
        let Some(id) = id else {
            return Err(FinwellError::catalog(
                "building catalog",
                CatalogErrorKind::MissingVariant {
                    dimension: dimension.to_string(),
                    variant: variant.to_string(),
                },
            ));
        };
        resolved[dimension] = lookup(positions, id, &format!("{dimension} {variant}"))?;
    }
    Ok(resolved)
}

fn lookup(positions: &HashMap<String, usize>, id: &str, slot: &str) -> Result<usize> {
    positions.get(id).copied().ok_or_else(|| {
        FinwellError::catalog(
            "building catalog",
            CatalogErrorKind::UnknownStep {
                step: id.to_string(),
                slot: slot.to_string(),
            },
        )
    })
}

fn builtin_builder() -> ActionCatalogBuilder {
    use Dimension::{Confidence, Habits, Inclusion, Resilience};

    ActionCatalog::builder()
        .step(ActionStep::new(
            "focus-spending-snapshot",
            Some(Habits),
            LocalizedText::new("Take a spending snapshot", "Haz una foto de tus gastos"),
            LocalizedText::new(
                "Write down everything you spend for one week. No judgment, just data.",
                "Anota todo lo que gastas durante una semana. Sin juzgar, solo datos.",
            ),
            "/lessons/spending-snapshot",
        ))
        .step(ActionStep::new(
            "grow-automate-savings",
            Some(Habits),
            LocalizedText::new("Automate a small transfer", "Automatiza una pequeña transferencia"),
            LocalizedText::new(
                "Schedule a transfer to savings on every payday so saving happens by default.",
                "Programa una transferencia al ahorro cada día de pago para ahorrar sin pensarlo.",
            ),
            "/lessons/automate-savings",
        ))
        .step(ActionStep::new(
            "focus-money-questions",
            Some(Confidence),
            LocalizedText::new("List your money questions", "Anota tus dudas de dinero"),
            LocalizedText::new(
                "Pick the one money topic that confuses you most and find one trusted answer.",
                "Elige el tema de dinero que más te confunde y busca una respuesta confiable.",
            ),
            "/lessons/money-questions",
        ))
        .step(ActionStep::new(
            "grow-invest-basics",
            Some(Confidence),
            LocalizedText::new("Learn investing basics", "Aprende lo básico de invertir"),
            LocalizedText::new(
                "Understand how index funds and retirement accounts grow over time.",
                "Entiende cómo crecen con el tiempo los fondos indexados y las cuentas de retiro.",
            ),
            "/lessons/invest-basics?level=intro",
        ))
        .step(ActionStep::new(
            "focus-emergency-cushion",
            Some(Resilience),
            LocalizedText::new("Start an emergency cushion", "Empieza un colchón de emergencia"),
            LocalizedText::new(
                "Set aside a first small goal, even a few dollars a week, for surprises.",
                "Aparta una primera meta pequeña, aunque sean unos dólares por semana, para imprevistos.",
            ),
            "/lessons/emergency-cushion",
        ))
        .step(ActionStep::new(
            "grow-three-month-buffer",
            Some(Resilience),
            LocalizedText::new("Build toward three months", "Construye hacia tres meses"),
            LocalizedText::new(
                "Grow your cushion until it covers three months of essential expenses.",
                "Haz crecer tu colchón hasta cubrir tres meses de gastos esenciales.",
            ),
            "/lessons/three-month-buffer",
        ))
        .step(ActionStep::new(
            "focus-safe-account",
            Some(Inclusion),
            LocalizedText::new("Find a safe, low-fee account", "Encuentra una cuenta segura y sin comisiones"),
            LocalizedText::new(
                "Compare credit unions and low-fee accounts that don't require a credit history.",
                "Compara cooperativas y cuentas de bajo costo que no piden historial de crédito.",
            ),
            "/lessons/safe-account",
        ))
        .step(ActionStep::new(
            "grow-credit-builder",
            Some(Inclusion),
            LocalizedText::new("Build your credit", "Construye tu crédito"),
            LocalizedText::new(
                "Use a secured card or credit-builder loan and pay it in full every month.",
                "Usa una tarjeta asegurada o un préstamo para crédito y págalo completo cada mes.",
            ),
            "/lessons/credit-builder",
        ))
        .step(ActionStep::new(
            "general-monthly-checkin",
            None,
            LocalizedText::new("Schedule a monthly money check-in", "Agenda una revisión mensual"),
            LocalizedText::new(
                "Block 20 minutes each month to review what came in, what went out and what's next.",
                "Reserva 20 minutos al mes para revisar lo que entró, lo que salió y lo que sigue.",
            ),
            "/tools/checkin#start",
        ))
        .step(ActionStep::new(
            "general-one-small-step",
            None,
            LocalizedText::new("Pick one small step", "Elige un paso pequeño"),
            LocalizedText::new(
                "Choose a single action you can finish today. Momentum beats perfection.",
                "Elige una sola acción que puedas terminar hoy. El impulso vale más que la perfección.",
            ),
            "/lessons/one-small-step",
        ))
        .step(ActionStep::new(
            "general-free-counseling",
            None,
            LocalizedText::new("Talk to a free counselor", "Habla con un asesor gratuito"),
            LocalizedText::new(
                "Nonprofit financial counselors can review your situation at no cost.",
                "Los asesores financieros sin fines de lucro pueden revisar tu situación sin costo.",
            ),
            "https://www.consumerfinance.gov/find-a-housing-counselor/",
        ))
        .focus(Habits, "focus-spending-snapshot")
        .growth(Habits, "grow-automate-savings")
        .focus(Confidence, "focus-money-questions")
        .growth(Confidence, "grow-invest-basics")
        .focus(Resilience, "focus-emergency-cushion")
        .growth(Resilience, "grow-three-month-buffer")
        .focus(Inclusion, "focus-safe-account")
        .growth(Inclusion, "grow-credit-builder")
        .fallback("general-monthly-checkin")
        .fallback("focus-emergency-cushion")
        .fallback("general-one-small-step")
        .fallback("general-free-counseling")
}
