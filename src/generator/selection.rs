use crate::catalog::Archetype;
use crate::generator::variety::VarietyTracker;
use crate::model::{Item, ItemKind, Tag};
use crate::pool::TagIndex;
use ahash::AHashSet;
use itertools::Itertools;
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// One entry of an assembled selection, with its provenance.
#[derive(Debug, Clone)]
pub(super) struct Selected {
    pub item: Item,
    pub kind: ItemKind,
    pub group: Option<usize>,
    pub forced: bool,
}

/// The result of filling one archetype's slots.
#[derive(Debug, Clone)]
pub(super) struct SelectionOutcome {
    pub selections: Vec<Selected>,
    pub archetype_used: String,
    pub unfilled_groups: Vec<usize>,
}

/// Fills an archetype's tag-group slots from the ingredient and preparation
/// indices.
///
/// Selection is soft constraint satisfaction: a slot without candidates is
/// skipped, never fatal. Forced inclusions are seeded first and survive the
/// dedup pass unconditionally.
pub(super) struct SelectionEngine<'a> {
    ingredients: &'a TagIndex,
    preparations: &'a TagIndex,
    share_ceiling: f64,
}

impl<'a> SelectionEngine<'a> {
    pub(super) fn new(
        ingredients: &'a TagIndex,
        preparations: &'a TagIndex,
        share_ceiling: f64,
    ) -> Self {
        Self {
            ingredients,
            preparations,
            share_ceiling,
        }
    }

    pub(super) fn select(
        &self,
        archetype: &Archetype,
        fallback: &Archetype,
        suggested: &[String],
        tracker: &mut VarietyTracker,
        batch_size: usize,
        rng: &mut impl Rng,
    ) -> SelectionOutcome {
        let mut selections: Vec<Selected> = Vec::new();
        let mut taken: AHashSet<String> = AHashSet::new();
        let mut unfilled_groups: Vec<usize> = Vec::new();

        // 1. Seed forced inclusions that resolve in either pool.
        for name in suggested {
            let Some((item, kind)) = self.resolve_name(name) else {
                debug!(name = %name, "suggested name not found in any pool");
                continue;
            };
            if !taken.insert(item.key()) {
                continue;
            }
            tracker.increment(&item.name);
            selections.push(Selected {
                item,
                kind,
                group: None,
                forced: true,
            });
        }

        // An archetype with zero coverage across every group falls back to
        // the catalog default instead of failing the batch.
        let (groups, archetype_used) = if self.has_any_coverage(archetype) {
            (&archetype.tag_groups, archetype.id.clone())
        } else {
            warn!(
                archetype = %archetype.id,
                fallback = %fallback.id,
                "archetype has no pool coverage, using fallback tag-groups"
            );
            (&fallback.tag_groups, fallback.id.clone())
        };

        // 2. Fill each slot in order with a variety-weighted pick.
        for (group_idx, group) in groups.iter().enumerate() {
            let candidates = self.candidates_for(group, &taken);
            if candidates.is_empty() {
                debug!(
                    archetype = %archetype_used,
                    group = group_idx,
                    "tag-group has no remaining candidates, slot left unfilled"
                );
                unfilled_groups.push(group_idx);
                continue;
            }
            let (item, kind) = self.pick(&candidates, tracker, batch_size, rng);
            taken.insert(item.key());
            tracker.increment(&item.name);
            selections.push(Selected {
                item,
                kind,
                group: Some(group_idx),
                forced: false,
            });
        }

        // 3. Dedup pass: case-insensitive collisions drop the later entry and
        // backfill its group from whatever candidates remain.
        self.dedup(
            &mut selections,
            groups,
            tracker,
            batch_size,
            rng,
            &mut unfilled_groups,
        );

        SelectionOutcome {
            selections,
            archetype_used,
            unfilled_groups,
        }
    }

    fn resolve_name(&self, name: &str) -> Option<(Item, ItemKind)> {
        self.ingredients
            .lookup(name)
            .map(|i| (i.clone(), ItemKind::Ingredient))
            .or_else(|| {
                self.preparations
                    .lookup(name)
                    .map(|i| (i.clone(), ItemKind::Preparation))
            })
    }

    fn has_any_coverage(&self, archetype: &Archetype) -> bool {
        archetype.tag_groups.iter().any(|group| {
            group.iter().any(|tag| {
                !self.ingredients.items_with_tag(tag).is_empty()
                    || !self.preparations.items_with_tag(tag).is_empty()
            })
        })
    }

    /// Union of both indices over the group's tags, minus already-taken
    /// names, deduplicated while preserving index order.
    fn candidates_for(&self, group: &[Tag], taken: &AHashSet<String>) -> Vec<(Item, ItemKind)> {
        group
            .iter()
            .flat_map(|tag| {
                self.ingredients
                    .items_with_tag(tag)
                    .iter()
                    .map(|i| (i.clone(), ItemKind::Ingredient))
                    .chain(
                        self.preparations
                            .items_with_tag(tag)
                            .iter()
                            .map(|i| (i.clone(), ItemKind::Preparation)),
                    )
            })
            .filter(|(item, _)| !taken.contains(&item.key()))
            .unique_by(|(item, _)| item.key())
            .collect()
    }

    /// Weighted random pick with weight `1 / (1 + usage)`, clamped so that no
    /// name's post-selection share of the running batch exceeds the ceiling.
    /// When the pick would exceed it, the highest-weighted candidate that
    /// still fits wins instead; when none fits, the original pick stands.
    fn pick(
        &self,
        candidates: &[(Item, ItemKind)],
        tracker: &VarietyTracker,
        batch_size: usize,
        rng: &mut impl Rng,
    ) -> (Item, ItemKind) {
        let weights: Vec<f64> = candidates
            .iter()
            .map(|(item, _)| 1.0 / (1.0 + f64::from(tracker.usage_count(&item.name))))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut chosen = candidates.len() - 1;
        let mut roll = rng.random_range(0.0..total);
        for (idx, weight) in weights.iter().enumerate() {
            if roll < *weight {
                chosen = idx;
                break;
            }
            roll -= weight;
        }

        if batch_size > 0 && self.would_exceed_ceiling(&candidates[chosen].0, tracker, batch_size)
        {
            let fitting = (0..candidates.len())
                .filter(|&idx| {
                    !self.would_exceed_ceiling(&candidates[idx].0, tracker, batch_size)
                })
                .sorted_by(|&a, &b| {
                    weights[b].partial_cmp(&weights[a]).unwrap_or(Ordering::Equal)
                })
                .next();
            if let Some(idx) = fitting {
                debug!(
                    over = %candidates[chosen].0.name,
                    replacement = %candidates[idx].0.name,
                    "share ceiling reached, clamping selection"
                );
                chosen = idx;
            }
        }

        candidates[chosen].clone()
    }

    fn would_exceed_ceiling(
        &self,
        item: &Item,
        tracker: &VarietyTracker,
        batch_size: usize,
    ) -> bool {
        let post_share = f64::from(tracker.usage_count(&item.name) + 1) / batch_size as f64;
        post_share > self.share_ceiling
    }

    fn dedup(
        &self,
        selections: &mut Vec<Selected>,
        groups: &[Vec<Tag>],
        tracker: &mut VarietyTracker,
        batch_size: usize,
        rng: &mut impl Rng,
        unfilled_groups: &mut Vec<usize>,
    ) {
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut kept: Vec<Selected> = Vec::with_capacity(selections.len());
        let mut dropped_groups: Vec<usize> = Vec::new();

        for selected in selections.drain(..) {
            let fresh = seen.insert(selected.item.key());
            // Forced entries come first and are already deduplicated against
            // each other, so they always survive this pass.
            if fresh || selected.forced {
                kept.push(selected);
            } else if let Some(group_idx) = selected.group {
                debug!(
                    name = %selected.item.name,
                    group = group_idx,
                    "duplicate selection dropped, backfilling its group"
                );
                dropped_groups.push(group_idx);
            }
        }

        for group_idx in dropped_groups {
            let candidates = self.candidates_for(&groups[group_idx], &seen);
            if candidates.is_empty() {
                unfilled_groups.push(group_idx);
                continue;
            }
            let (item, kind) = self.pick(&candidates, tracker, batch_size, rng);
            seen.insert(item.key());
            tracker.increment(&item.name);
            kept.push(Selected {
                item,
                kind,
                group: Some(group_idx),
                forced: false,
            });
        }

        *selections = kept;
    }
}
