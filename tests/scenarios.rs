use cuckoofilter::{Filter64, FilterConfig, Filter64L, Filter64M, Filter64S, Large, Layout, Medium, Small};

fn len_and_cap<L: Layout>() {
    let f = Filter64::<L>::new(100);
    assert_eq!(f.len(), 0);
    assert_eq!(f.num_buckets(), 128);
    assert_eq!(f.cap(), 128 * L::SLOTS_PER_BUCKET);

    let f = Filter64::<L>::new(0);
    assert_eq!(f.len(), 0);
    assert_eq!(f.num_buckets(), 2);
    assert_eq!(f.cap(), 2 * L::SLOTS_PER_BUCKET);
}

fn insert_has<L: Layout>() {
    let mut f = Filter64::<L>::new(128);

    for i in 0..1000 {
        assert!(!f.has(i), "{i} should not be a member");
    }

    assert!(f.insert(12));
    assert!(f.has(12));

    // reinsert takes a second slot
    assert!(f.insert(12));
    assert!(f.has(12));

    assert!(!f.has(123));
    assert!(f.insert(123));
    assert!(f.has(123));
    assert!(f.has(12));
    assert_eq!(f.len(), 3);
}

fn delete_has<L: Layout>() {
    let mut f = Filter64::<L>::new(128);

    f.insert(123);
    assert!(f.has(123));
    assert!(!f.delete(456));
    assert!(f.delete(123));
    assert!(!f.has(123));

    f.insert(123);
    f.insert(456);
    assert!(f.has(123) && f.has(456));
    let len = f.len();
    assert!(!f.delete(789));
    assert_eq!(f.len(), len);

    assert!(f.delete(456));
    assert!(!f.has(456));
    assert!(f.delete(123));
    assert!(!f.has(123));
    assert!(f.is_empty());
}

fn full_filter<L: Layout>() {
    let mut f = Filter64::<L>::new(128);
    for i in 0..16 * f.cap() as u64 {
        f.insert(i);
        assert!(f.len() <= f.cap());
    }
    assert_eq!(f.len(), f.cap());
    assert!(f.is_full());

    let before = f.clone();
    assert!(!f.insert(123));
    assert_eq!(f, before);
    assert_eq!(f.load_factor(), 1.0);
}

#[test]
fn len_cap_small() {
    len_and_cap::<Small>();
}

#[test]
fn len_cap_medium() {
    len_and_cap::<Medium>();
}

#[test]
fn len_cap_large() {
    len_and_cap::<Large>();
}

#[test]
fn insert_has_small() {
    insert_has::<Small>();
}

#[test]
fn insert_has_medium() {
    insert_has::<Medium>();
}

#[test]
fn insert_has_large() {
    insert_has::<Large>();
}

#[test]
fn delete_has_small() {
    delete_has::<Small>();
}

#[test]
fn delete_has_medium() {
    delete_has::<Medium>();
}

#[test]
fn delete_has_large() {
    delete_has::<Large>();
}

#[test]
fn full_filter_small() {
    full_filter::<Small>();
}

#[test]
fn full_filter_medium() {
    full_filter::<Medium>();
}

#[test]
fn full_filter_large() {
    full_filter::<Large>();
}

#[test]
fn aliases_pick_their_layout() {
    assert_eq!(Filter64S::new(8).bucket_bits(), 8);
    assert_eq!(Filter64M::new(8).bucket_bits(), 16);
    assert_eq!(Filter64L::new(8).bucket_bits(), 32);
}

#[test]
fn relocation_limit_grows_with_table() {
    assert_eq!(Filter64S::new(2).max_relocations(), 13);
    assert_eq!(Filter64S::new(1 << 16).max_relocations(), 221);

    let config = FilterConfig::new(1 << 16).with_max_relocations(1000);
    assert_eq!(Filter64L::with_config(&config).unwrap().max_relocations(), 1000);
}
