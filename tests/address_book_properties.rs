use address_book::{
    AddressBookService, Contact, ContactRepository, CsvContactReader, Gender,
    InMemoryContactRepository,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

// 1950-01-01 ..= 2049-12-31 round-trips through dd/MM/yy with the default pivot
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    (0i64..36_525).prop_map(move |offset| start + chrono::Duration::days(offset))
}

fn arb_contact() -> impl Strategy<Value = Contact> {
    ("[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}", arb_gender(), arb_date())
        .prop_map(|(name, gender, date)| Contact::new(name, gender, date))
}

fn to_line(contact: &Contact) -> String {
    let dob = contact.date_of_birth();
    format!(
        "{},{},{:02}/{:02}/{:02}",
        contact.full_name(),
        contact.gender(),
        dob.day(),
        dob.month(),
        dob.year() % 100
    )
}

proptest! {
    #[test]
    fn parsing_keeps_every_record_in_order(contacts in prop::collection::vec(arb_contact(), 0..20)) {
        let text: String = contacts.iter().map(|c| to_line(c) + "\n").collect();
        let parsed = CsvContactReader::default().read(text.as_bytes()).unwrap();

        prop_assert_eq!(parsed, contacts);
    }

    #[test]
    fn gender_counts_cover_everyone(contacts in prop::collection::vec(arb_contact(), 0..30)) {
        let repo = InMemoryContactRepository::new(contacts);

        prop_assert_eq!(
            repo.count_by_gender(Gender::Male) + repo.count_by_gender(Gender::Female),
            repo.find_all().len()
        );
    }

    #[test]
    fn oldest_people_share_the_earliest_date(contacts in prop::collection::vec(arb_contact(), 0..30)) {
        let service = AddressBookService::new(InMemoryContactRepository::new(contacts));
        let oldest = service.find_oldest_people();
        let earliest = service.repository().find_earliest_date_of_birth();

        prop_assert_eq!(oldest.is_empty(), service.find_all().is_empty());
        match earliest {
            Some(earliest) => {
                prop_assert!(oldest.iter().all(|c| c.date_of_birth() == earliest));
                prop_assert_eq!(service.repository().find_by_date_of_birth(earliest), oldest);
            }
            None => prop_assert!(oldest.is_empty()),
        }
    }

    #[test]
    fn age_difference_is_symmetric(a in arb_date(), b in arb_date()) {
        let service = AddressBookService::new(InMemoryContactRepository::new(vec![
            Contact::new("First Person", Gender::Male, a),
            Contact::new("Second Person", Gender::Female, b),
        ]));

        let forward = service.age_difference_in_days("First Person", "Second Person").unwrap();
        let backward = service.age_difference_in_days("Second Person", "First Person").unwrap();

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, (a - b).num_days().unsigned_abs());
        prop_assert_eq!(service.age_difference_in_days("First Person", "First Person").unwrap(), 0);
    }
}
