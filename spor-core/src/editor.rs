//! Add, edit, delete and reorder commands over an [`EntryStore`].
//!
//! The editor owns the input rules the store does not enforce: trimmed
//! names, set/rep bounds, zero-to-absent macro normalization, and dense
//! per-day ranks for program entries.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult, ValidationError};
use crate::models::{
    check_macro, normalize_macro, DayIndex, DietEntry, MealType, ProgramEntry,
};
use crate::store::{Collection, EntryStore};

pub const SETS_RANGE: RangeInclusive<u32> = 1..=20;
pub const REPS_RANGE: RangeInclusive<u32> = 1..=100;

/// Input for [`EntryEditor::add_program_entry`].
#[derive(Debug, Clone)]
pub struct NewProgramEntry {
    pub day: DayIndex,
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    pub image: Option<Vec<u8>>,
}

/// Input for [`EntryEditor::add_diet_entry`]. Zero macros are stored as absent.
#[derive(Debug, Clone)]
pub struct NewDietEntry {
    pub day: DayIndex,
    pub meal_type: MealType,
    pub title: String,
    pub protein: Option<f64>,
    pub carb: Option<f64>,
    pub fat: Option<f64>,
    pub note: Option<String>,
}

/// Partial update for a program entry. `None` leaves a field unchanged;
/// `image: Some(None)` removes the image.
#[derive(Debug, Clone, Default)]
pub struct ProgramPatch {
    pub exercise_name: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub day: Option<DayIndex>,
    pub image: Option<Option<Vec<u8>>>,
}

impl ProgramPatch {
    pub fn is_empty(&self) -> bool {
        self.exercise_name.is_none()
            && self.sets.is_none()
            && self.reps.is_none()
            && self.day.is_none()
            && self.image.is_none()
    }
}

/// Partial update for a diet entry. `Some(None)` clears an optional field,
/// and `Some(Some(0.0))` for a macro also clears it.
#[derive(Debug, Clone, Default)]
pub struct DietPatch {
    pub day: Option<DayIndex>,
    pub meal_type: Option<MealType>,
    pub title: Option<String>,
    pub protein: Option<Option<f64>>,
    pub carb: Option<Option<f64>>,
    pub fat: Option<Option<f64>>,
    pub note: Option<Option<String>>,
}

impl DietPatch {
    pub fn is_empty(&self) -> bool {
        self.day.is_none()
            && self.meal_type.is_none()
            && self.title.is_none()
            && self.protein.is_none()
            && self.carb.is_none()
            && self.fat.is_none()
            && self.note.is_none()
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn check_bounds(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<u32, ValidationError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value as i64,
            min: *range.start() as i64,
            max: *range.end() as i64,
        })
    }
}

fn clean_macro(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    check_macro(field, value)?;
    Ok(normalize_macro(value))
}

pub struct EntryEditor<S> {
    store: S,
}

impl<S: EntryStore> EntryEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends an exercise to the end of its day.
    pub async fn add_program_entry(&self, new: NewProgramEntry) -> StoreResult<ProgramEntry> {
        let name = required_text("exercise name", &new.exercise_name)?;
        let sets = check_bounds("sets", new.sets, &SETS_RANGE)?;
        let reps = check_bounds("reps", new.reps, &REPS_RANGE)?;

        let position = self.store.program_entries_for_day(new.day).await?.len() as i64;
        let mut entry = ProgramEntry::new(new.day, name, sets, reps).with_sort_order(position);
        entry.exercise_image_data = new.image;

        self.store.insert(&entry.clone().into()).await?;
        tracing::info!(id = %entry.id, day = %entry.day_index, position, "added exercise");
        Ok(entry)
    }

    pub async fn add_diet_entry(&self, new: NewDietEntry) -> StoreResult<DietEntry> {
        let title = required_text("title", &new.title)?;
        let protein = clean_macro("protein", new.protein)?;
        let carb = clean_macro("carb", new.carb)?;
        let fat = clean_macro("fat", new.fat)?;

        let position = self.store.diet_entries_for_day(new.day).await?.len() as i64;
        let mut entry = DietEntry::new(new.day, new.meal_type, title)
            .with_macros(protein, carb, fat)
            .with_sort_order(position);
        entry.note = new.note.filter(|n| !n.trim().is_empty());

        self.store.insert(&entry.clone().into()).await?;
        tracing::info!(id = %entry.id, day = %entry.day_index, meal = %entry.meal_type, "added meal");
        Ok(entry)
    }

    /// Applies a patch. Moving to another day appends the entry there and
    /// closes the gap it leaves behind.
    ///
    /// A move is two store writes: the entry itself, then the old day's
    /// ranks. They are not atomic together. If the second write fails the
    /// entry has moved and the old day keeps a gap in its ranks; order is
    /// still preserved, and the next reorder, move or delete on that day
    /// rewrites its ranks to `0..n-1`.
    pub async fn update_program_entry(
        &self,
        id: Uuid,
        patch: ProgramPatch,
    ) -> StoreResult<ProgramEntry> {
        let mut entry = self
            .store
            .get_program_entry(id)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        let previous_day = entry.day_index;

        if let Some(name) = &patch.exercise_name {
            entry.exercise_name = required_text("exercise name", name)?;
        }
        if let Some(sets) = patch.sets {
            entry.sets = check_bounds("sets", sets, &SETS_RANGE)?;
        }
        if let Some(reps) = patch.reps {
            entry.reps = check_bounds("reps", reps, &REPS_RANGE)?;
        }
        if let Some(image) = patch.image {
            entry.exercise_image_data = image;
        }

        let moved = matches!(patch.day, Some(day) if day != previous_day);
        if let Some(day) = patch.day.filter(|_| moved) {
            entry.day_index = day;
            entry.sort_order = self.store.program_entries_for_day(day).await?.len() as i64;
        }

        self.store.update(&entry.clone().into()).await?;
        if moved {
            self.compact_day(previous_day).await?;
        }
        tracing::info!(%id, day = %entry.day_index, "updated exercise");
        Ok(entry)
    }

    pub async fn update_diet_entry(&self, id: Uuid, patch: DietPatch) -> StoreResult<DietEntry> {
        let mut entry = self
            .store
            .get_diet_entry(id)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = &patch.title {
            entry.title = required_text("title", title)?;
        }
        if let Some(meal_type) = patch.meal_type {
            entry.meal_type = meal_type;
        }
        if let Some(protein) = patch.protein {
            entry.protein = clean_macro("protein", protein)?;
        }
        if let Some(carb) = patch.carb {
            entry.carb = clean_macro("carb", carb)?;
        }
        if let Some(fat) = patch.fat {
            entry.fat = clean_macro("fat", fat)?;
        }
        if let Some(note) = patch.note {
            entry.note = note.filter(|n| !n.trim().is_empty());
        }
        if let Some(day) = patch.day.filter(|d| *d != entry.day_index) {
            entry.day_index = day;
            entry.sort_order = self.store.diet_entries_for_day(day).await?.len() as i64;
        }

        self.store.update(&entry.clone().into()).await?;
        tracing::info!(%id, day = %entry.day_index, "updated meal");
        Ok(entry)
    }

    /// Removes an exercise and closes the gap in its day's ranks.
    /// Returns `false` if no such entry existed.
    pub async fn delete_program_entry(&self, id: Uuid) -> StoreResult<bool> {
        let Some(entry) = self.store.get_program_entry(id).await? else {
            tracing::debug!(%id, "delete of unknown exercise ignored");
            return Ok(false);
        };
        let removed = self.store.delete(Collection::Program, id).await?;
        if removed {
            self.compact_day(entry.day_index).await?;
            tracing::info!(%id, day = %entry.day_index, "deleted exercise");
        }
        Ok(removed)
    }

    pub async fn delete_diet_entry(&self, id: Uuid) -> StoreResult<bool> {
        let removed = self.store.delete(Collection::Diet, id).await?;
        if removed {
            tracing::info!(%id, "deleted meal");
        } else {
            tracing::debug!(%id, "delete of unknown meal ignored");
        }
        Ok(removed)
    }

    /// Ranks a day's exercises by their position in `ids`, which must name
    /// every exercise of that day exactly once. Returns the day in its new
    /// order.
    pub async fn reorder_program_entries(
        &self,
        day: DayIndex,
        ids: &[Uuid],
    ) -> StoreResult<Vec<ProgramEntry>> {
        let current = self.store.program_entries_for_day(day).await?;
        let expected: HashSet<Uuid> = current.iter().map(|e| e.id).collect();

        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(*id) {
                return Err(ValidationError::InvalidOrder(format!("{} listed twice", id)).into());
            }
            if !expected.contains(id) {
                return Err(ValidationError::InvalidOrder(format!(
                    "{} is not scheduled on {}",
                    id, day
                ))
                .into());
            }
        }
        if seen.len() != expected.len() {
            tracing::warn!(
                day = %day,
                expected = expected.len(),
                got = seen.len(),
                "incomplete reorder rejected"
            );
            return Err(ValidationError::InvalidOrder(format!(
                "expected {} exercises for {}, got {}",
                expected.len(),
                day,
                seen.len()
            ))
            .into());
        }

        let ranks: Vec<(Uuid, i64)> = ids
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, position as i64))
            .collect();
        self.store.reassign_sort_orders(&ranks).await?;
        tracing::info!(day = %day, count = ranks.len(), "reordered exercises");

        self.store.program_entries_for_day(day).await
    }

    /// Drag-style move: takes the exercise at position `from` and puts it at
    /// position `to` of the resulting list.
    pub async fn move_program_entry(
        &self,
        day: DayIndex,
        from: usize,
        to: usize,
    ) -> StoreResult<Vec<ProgramEntry>> {
        let mut ids: Vec<Uuid> = self
            .store
            .program_entries_for_day(day)
            .await?
            .iter()
            .map(|e| e.id)
            .collect();
        if from >= ids.len() || to >= ids.len() {
            tracing::warn!(
                day = %day,
                from,
                to,
                len = ids.len(),
                "move outside the day rejected"
            );
            return Err(ValidationError::InvalidOrder(format!(
                "positions must be below {} for {}",
                ids.len(),
                day
            ))
            .into());
        }
        let id = ids.remove(from);
        ids.insert(to, id);
        self.reorder_program_entries(day, &ids).await
    }

    /// Rewrites a day's ranks to `0..n-1`, keeping the current order.
    async fn compact_day(&self, day: DayIndex) -> StoreResult<()> {
        let entries = self.store.program_entries_for_day(day).await?;
        let dense = entries
            .iter()
            .enumerate()
            .all(|(position, e)| e.sort_order == position as i64);
        if dense {
            return Ok(());
        }
        let ranks: Vec<(Uuid, i64)> = entries
            .iter()
            .enumerate()
            .map(|(position, e)| (e.id, position as i64))
            .collect();
        self.store.reassign_sort_orders(&ranks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{exercise_count, group_by_day};
    use crate::store::{MemoryStore, SortKey};

    fn day(n: i64) -> DayIndex {
        DayIndex::new(n).unwrap()
    }

    fn editor() -> EntryEditor<MemoryStore> {
        EntryEditor::new(MemoryStore::new())
    }

    fn exercise(day: DayIndex, name: &str) -> NewProgramEntry {
        NewProgramEntry {
            day,
            exercise_name: name.to_string(),
            sets: 3,
            reps: 12,
            image: None,
        }
    }

    fn meal(title: &str, protein: Option<f64>, carb: Option<f64>, fat: Option<f64>) -> NewDietEntry {
        NewDietEntry {
            day: day(0),
            meal_type: MealType::Breakfast,
            title: title.to_string(),
            protein,
            carb,
            fat,
            note: None,
        }
    }

    async fn ranks(editor: &EntryEditor<MemoryStore>, d: DayIndex) -> Vec<(String, i64)> {
        editor
            .store()
            .program_entries_for_day(d)
            .await
            .unwrap()
            .into_iter()
            .map(|e| (e.exercise_name, e.sort_order))
            .collect()
    }

    #[tokio::test]
    async fn test_add_appends_in_insertion_order() {
        let editor = editor();
        for name in ["Squat", "Bench", "Row"] {
            editor.add_program_entry(exercise(day(2), name)).await.unwrap();
        }

        let in_insertion_order: Vec<i64> = editor
            .store()
            .program_entries(None)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.sort_order)
            .collect();
        assert_eq!(in_insertion_order, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_add_position_counts_only_same_day() {
        let editor = editor();
        editor.add_program_entry(exercise(day(0), "Mon")).await.unwrap();
        let tuesday = editor.add_program_entry(exercise(day(1), "Tue")).await.unwrap();
        assert_eq!(tuesday.sort_order, 0);
    }

    #[tokio::test]
    async fn test_add_program_entry_validates_input() {
        let editor = editor();

        let blank = editor.add_program_entry(exercise(day(0), "  ")).await;
        assert!(matches!(
            blank,
            Err(StoreError::Validation(ValidationError::EmptyField(_)))
        ));

        let mut too_many_sets = exercise(day(0), "Curl");
        too_many_sets.sets = 21;
        assert!(matches!(
            editor.add_program_entry(too_many_sets).await,
            Err(StoreError::Validation(ValidationError::OutOfRange { field: "sets", .. }))
        ));

        let mut no_reps = exercise(day(0), "Curl");
        no_reps.reps = 0;
        assert!(matches!(
            editor.add_program_entry(no_reps).await,
            Err(StoreError::Validation(ValidationError::OutOfRange { field: "reps", .. }))
        ));

        assert!(editor.store().program_entries(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_program_entry_trims_and_keeps_image() {
        let editor = editor();
        let mut new = exercise(day(0), "  Lunge ");
        new.image = Some(vec![1, 2, 3]);

        let added = editor.add_program_entry(new).await.unwrap();
        let stored = editor
            .store()
            .get_program_entry(added.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, added);
        assert_eq!(stored.exercise_name, "Lunge");
        assert_eq!(stored.exercise_image_data, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_zero_macro_is_stored_as_absent() {
        let editor = editor();
        let added = editor
            .add_diet_entry(meal("Toast", Some(0.0), Some(30.0), Some(0.0)))
            .await
            .unwrap();

        let stored = editor.store().get_diet_entry(added.id).await.unwrap().unwrap();
        assert_eq!(stored.protein, None);
        assert_eq!(stored.carb, Some(30.0));
        assert_eq!(stored.fat, None);
    }

    #[tokio::test]
    async fn test_negative_macro_rejected() {
        let editor = editor();
        let result = editor
            .add_diet_entry(meal("Toast", Some(-1.0), None, None))
            .await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::NegativeMacro { field: "protein", .. }))
        ));
        assert!(editor.store().diet_entries(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let editor = editor();
        let result = editor.add_diet_entry(meal("", None, None, None)).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyField("title")))
        ));
    }

    #[tokio::test]
    async fn test_update_diet_normalizes_zero() {
        let editor = editor();
        let added = editor
            .add_diet_entry(meal("Yogurt", Some(10.0), Some(12.0), Some(4.0)))
            .await
            .unwrap();

        let patch = DietPatch {
            title: Some("Greek yogurt".to_string()),
            protein: Some(Some(0.0)),
            fat: Some(None),
            ..Default::default()
        };
        let updated = editor.update_diet_entry(added.id, patch).await.unwrap();

        assert_eq!(updated.title, "Greek yogurt");
        assert_eq!(updated.protein, None);
        assert_eq!(updated.carb, Some(12.0));
        assert_eq!(updated.fat, None);
        assert_eq!(updated.created_at, added.created_at);
        assert_eq!(updated.id, added.id);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let editor = editor();
        let id = Uuid::new_v4();
        let result = editor
            .update_program_entry(id, ProgramPatch::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_missing_diet_entry_is_not_found() {
        let editor = editor();
        let id = Uuid::new_v4();
        let result = editor
            .update_diet_entry(
                id,
                DietPatch {
                    title: Some("Soup".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(missing)) if missing == id));
        assert!(editor.store().diet_entries(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_move_diet_entry_to_other_day_appends() {
        let editor = editor();
        let oats = editor.add_diet_entry(meal("Oats", Some(11.0), None, None)).await.unwrap();
        editor.add_diet_entry(meal("Eggs", Some(13.0), None, None)).await.unwrap();

        let mut friday_meal = meal("Rice", None, Some(45.0), None);
        friday_meal.day = day(4);
        editor.add_diet_entry(friday_meal).await.unwrap();

        let moved = editor
            .update_diet_entry(
                oats.id,
                DietPatch {
                    day: Some(day(4)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.day_index, day(4));
        assert_eq!(moved.sort_order, 1);
        assert_eq!(moved.created_at, oats.created_at);

        let monday = editor.store().diet_entries_for_day(day(0)).await.unwrap();
        let friday = editor.store().diet_entries_for_day(day(4)).await.unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].title, "Eggs");
        assert_eq!(friday.len(), 2);
        assert!(friday.iter().any(|e| e.id == oats.id));
    }

    #[tokio::test]
    async fn test_update_program_entry_fields() {
        let editor = editor();
        let added = editor
            .add_program_entry(exercise(day(0), "Press"))
            .await
            .unwrap();

        let patch = ProgramPatch {
            exercise_name: Some("Overhead Press".to_string()),
            sets: Some(5),
            reps: Some(5),
            image: Some(Some(vec![4, 2])),
            ..Default::default()
        };
        let updated = editor.update_program_entry(added.id, patch).await.unwrap();
        assert_eq!(updated.exercise_name, "Overhead Press");
        assert_eq!((updated.sets, updated.reps), (5, 5));
        assert_eq!(updated.exercise_image_data, Some(vec![4, 2]));

        let cleared = editor
            .update_program_entry(
                added.id,
                ProgramPatch {
                    image: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(cleared.exercise_image_data.is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_out_of_range_without_writing() {
        let editor = editor();
        let added = editor
            .add_program_entry(exercise(day(0), "Press"))
            .await
            .unwrap();

        let patch = ProgramPatch {
            exercise_name: Some("Changed".to_string()),
            reps: Some(101),
            ..Default::default()
        };
        assert!(editor.update_program_entry(added.id, patch).await.is_err());

        let stored = editor
            .store()
            .get_program_entry(added.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.exercise_name, "Press");
    }

    #[tokio::test]
    async fn test_move_to_other_day_appends_and_compacts() {
        let editor = editor();
        let a = editor.add_program_entry(exercise(day(0), "A")).await.unwrap();
        editor.add_program_entry(exercise(day(0), "B")).await.unwrap();
        editor.add_program_entry(exercise(day(1), "X")).await.unwrap();

        let moved = editor
            .update_program_entry(
                a.id,
                ProgramPatch {
                    day: Some(day(1)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.sort_order, 1);

        assert_eq!(ranks(&editor, day(0)).await, vec![("B".to_string(), 0)]);
        assert_eq!(
            ranks(&editor, day(1)).await,
            vec![("X".to_string(), 0), ("A".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_reorder_reads_back_new_order() {
        let editor = editor();
        let a = editor.add_program_entry(exercise(day(3), "a")).await.unwrap();
        let b = editor.add_program_entry(exercise(day(3), "b")).await.unwrap();
        let c = editor.add_program_entry(exercise(day(3), "c")).await.unwrap();

        let reordered = editor
            .reorder_program_entries(day(3), &[c.id, a.id, b.id])
            .await
            .unwrap();
        let ids: Vec<Uuid> = reordered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);

        let sorted: Vec<Uuid> = editor
            .store()
            .program_entries(Some(SortKey::SortOrder))
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(sorted, vec![c.id, a.id, b.id]);

        let orders: HashSet<i64> = reordered.iter().map(|e| e.sort_order).collect();
        assert_eq!(orders, HashSet::from([0, 1, 2]));
    }

    #[tokio::test]
    async fn test_reorder_rejects_incomplete_or_foreign_ids() {
        let editor = editor();
        let a = editor.add_program_entry(exercise(day(3), "a")).await.unwrap();
        let b = editor.add_program_entry(exercise(day(3), "b")).await.unwrap();
        let other = editor.add_program_entry(exercise(day(4), "z")).await.unwrap();

        for order in [
            vec![b.id],
            vec![b.id, a.id, a.id],
            vec![b.id, other.id],
            vec![a.id, b.id, Uuid::new_v4()],
        ] {
            let result = editor.reorder_program_entries(day(3), &order).await;
            assert!(matches!(
                result,
                Err(StoreError::Validation(ValidationError::InvalidOrder(_)))
            ));
        }

        assert_eq!(
            ranks(&editor, day(3)).await,
            vec![("a".to_string(), 0), ("b".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_move_program_entry() {
        let editor = editor();
        for name in ["a", "b", "c", "d"] {
            editor.add_program_entry(exercise(day(5), name)).await.unwrap();
        }

        let moved = editor.move_program_entry(day(5), 0, 2).await.unwrap();
        let names: Vec<_> = moved.iter().map(|e| e.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a", "d"]);

        assert!(editor.move_program_entry(day(5), 4, 0).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_from_queries_and_counts() {
        let editor = editor();
        let a = editor.add_program_entry(exercise(day(0), "a")).await.unwrap();
        editor.add_program_entry(exercise(day(0), "b")).await.unwrap();
        editor.add_program_entry(exercise(day(0), "c")).await.unwrap();

        assert!(editor.delete_program_entry(a.id).await.unwrap());

        let all = editor.store().program_entries(None).await.unwrap();
        assert!(all.iter().all(|e| e.id != a.id));
        let buckets = group_by_day(&all);
        assert_eq!(exercise_count(&buckets[0]), 2);

        assert_eq!(
            ranks(&editor, day(0)).await,
            vec![("b".to_string(), 0), ("c".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_delete_absent_returns_false() {
        let editor = editor();
        assert!(!editor.delete_program_entry(Uuid::new_v4()).await.unwrap());
        assert!(!editor.delete_diet_entry(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_diet_entry() {
        let editor = editor();
        let added = editor
            .add_diet_entry(meal("Soup", Some(8.0), None, None))
            .await
            .unwrap();

        assert!(editor.delete_diet_entry(added.id).await.unwrap());
        assert!(editor.store().diet_entries(None).await.unwrap().is_empty());
    }
}
