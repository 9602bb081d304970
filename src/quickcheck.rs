use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use crate::map::AvlMap;
use crate::set::AvlSet;

impl<K, V, C> Arbitrary for AvlMap<K, V, C>
where
    K: Arbitrary,
    V: Arbitrary,
    C: 'static + Clone + Compare<K> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> AvlMap<K, V, C> {
        let vec: Vec<(K, V)> = Arbitrary::arbitrary(g);
        let mut map = AvlMap::with_cmp(C::default());
        map.extend(vec);
        map
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = AvlMap<K, V, C>>> {
        let cmp = self.cmp().clone();
        let vec: Vec<(K, V)> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(move |vec| {
            let mut map = AvlMap::with_cmp(cmp.clone());
            map.extend(vec);
            map
        }))
    }
}

impl<T, C> Arbitrary for AvlSet<T, C>
where
    T: Arbitrary,
    C: 'static + Clone + Compare<T> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> AvlSet<T, C> {
        let vec: Vec<T> = Arbitrary::arbitrary(g);
        let mut set = AvlSet::with_cmp(C::default());
        set.extend(vec);
        set
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = AvlSet<T, C>>> {
        let cmp = self.cmp().clone();
        let vec: Vec<T> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(move |vec| {
            let mut set = AvlSet::with_cmp(cmp.clone());
            set.extend(vec);
            set
        }))
    }
}
