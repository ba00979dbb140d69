use crate::schema::{
    categories, countries, creature_categories, creature_owners, creatures, owners, reviewers,
    reviews,
};
use chrono::NaiveDate;
use diesel::prelude::*;

// ============= CREATURE MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = creatures)]
pub struct CreatureModel {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = creatures)]
pub struct NewCreatureModel<'a> {
    pub name: &'a str,
    pub birth_date: NaiveDate,
}

// Full-record replace, excludes id
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = creatures)]
pub struct CreatureChangeset<'a> {
    pub name: &'a str,
    pub birth_date: NaiveDate,
}

// ============= CATEGORY / COUNTRY MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryRecord<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = countries)]
pub struct CountryModel {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = countries)]
pub struct CountryRecord<'a> {
    pub name: &'a str,
}

// ============= OWNER MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = owners)]
pub struct OwnerModel {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub country_id: Option<i32>,
}

// Used for both insert and full replace; a `None` country is written as NULL.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = owners)]
#[diesel(treat_none_as_null = true)]
pub struct OwnerRecord<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub gender: &'a str,
    pub country_id: Option<i32>,
}

// ============= REVIEWER / REVIEW MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviewers)]
pub struct ReviewerModel {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = reviewers)]
pub struct ReviewerRecord<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewModel {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub creature_id: Option<i32>,
    pub reviewer_id: Option<i32>,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = reviews)]
#[diesel(treat_none_as_null = true)]
pub struct ReviewRecord<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub rating: i32,
    pub creature_id: Option<i32>,
    pub reviewer_id: Option<i32>,
}

// ============= JUNCTIONS =============

// The related side is `None` when the id given at creation did not resolve.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = creature_owners)]
pub struct CreatureOwnerModel {
    pub creature_id: i32,
    pub owner_id: Option<i32>,
}

#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = creature_categories)]
pub struct CreatureCategoryModel {
    pub creature_id: i32,
    pub category_id: Option<i32>,
}
